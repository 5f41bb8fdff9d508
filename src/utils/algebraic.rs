//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and grid squares.
//! Row 0 is rank 8, column 0 is the a-file.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert coordinate notation (for example: "e4") to a grid square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a grid square to coordinate notation (for example: "e4").
///
/// The square must lie on the board.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.col);
    let rank = char::from(b'8' - square.row);
    format!("{file}{rank}")
}
