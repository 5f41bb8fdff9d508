use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` on `square` attacks diagonally.
#[inline]
pub fn pawn_attack_squares(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}
