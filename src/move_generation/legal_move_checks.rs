//! Attack and check detection.
//!
//! Looks outward from the queried square for each attacker pattern instead of
//! generating the opponent's whole move list. Castling never attacks, and a
//! pawn attacks only diagonally, so an empty square in front of an enemy pawn
//! is not attacked.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

impl GameState {
    /// Whether the side to move has its king attacked.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    /// Whether `color`'s king is attacked by the other side.
    #[inline]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        is_square_attacked(&self.board, self.king_square(color), color.opposite())
    }

    /// Whether the opponent of the side to move attacks `square`.
    #[inline]
    pub fn is_square_attacked(&self, square: Square) -> bool {
        is_square_attacked(&self.board, square, self.side_to_move.opposite())
    }
}

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let is_attacker = |target: Square, kind: PieceKind| {
        piece_at(board, target).is_some_and(|piece| piece.is(attacker, kind))
    };

    // A pawn of `attacker` attacks `square` from one row behind it, diagonally.
    let back = -attacker.pawn_direction();
    for d_col in [-1i8, 1i8] {
        if let Some(from) = square.offset(back, d_col) {
            if is_attacker(from, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if knight_targets(square)
        .iter()
        .any(|&from| is_attacker(from, PieceKind::Knight))
    {
        return true;
    }

    if king_targets(square)
        .iter()
        .any(|&from| is_attacker(from, PieceKind::King))
    {
        return true;
    }

    ray_hits(board, square, attacker, &ROOK_DIRECTIONS, PieceKind::Rook)
        || ray_hits(board, square, attacker, &BISHOP_DIRECTIONS, PieceKind::Bishop)
}

/// First piece met along each direction is a `slider` or queen of `attacker`.
fn ray_hits(
    board: &Board,
    square: Square,
    attacker: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = square;
        while let Some(next) = cursor.offset(d_row, d_col) {
            if let Some(piece) = piece_at(board, next) {
                if piece.color == attacker
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            cursor = next;
        }
    }
    false
}
