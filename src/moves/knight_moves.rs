use crate::game_state::chess_types::Square;
use crate::moves::target_list::{generate_target_table, table_index, TargetList};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub static KNIGHT_TARGETS: [TargetList; 64] = generate_target_table(&KNIGHT_OFFSETS);

#[inline]
pub fn knight_targets(square: Square) -> &'static [Square] {
    KNIGHT_TARGETS[table_index(square)].as_slice()
}
