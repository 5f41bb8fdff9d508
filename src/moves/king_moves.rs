//! King step tables.
//!
//! Precomputed one-step destinations used by king move generation and by
//! attack detection around a square.

use crate::game_state::chess_types::Square;
use crate::moves::target_list::{generate_target_table, table_index, TargetList};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub static KING_TARGETS: [TargetList; 64] = generate_target_table(&KING_OFFSETS);

#[inline]
pub fn king_targets(square: Square) -> &'static [Square] {
    KING_TARGETS[table_index(square)].as_slice()
}
