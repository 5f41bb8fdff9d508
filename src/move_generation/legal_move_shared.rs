//! Helpers shared by the per-piece generators, and the kind-indexed
//! generator table used to dispatch on piece kind.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Pseudo-legal generator for one piece standing on `from`.
pub type PieceMoveGenerator = fn(&GameState, Square, Piece, &mut Vec<Move>);

/// Generator per piece kind, indexed by [`PieceKind::index`].
pub const PIECE_MOVE_GENERATORS: [PieceMoveGenerator; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

#[inline]
pub fn generator_for(kind: PieceKind) -> PieceMoveGenerator {
    PIECE_MOVE_GENERATORS[kind.index()]
}

/// Push a move to every square in `targets` not occupied by an ally.
#[inline]
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    targets: &[Square],
    out: &mut Vec<Move>,
) {
    for &to in targets {
        match game_state.piece_at(to) {
            Some(occupant) if occupant.color == piece.color => {}
            _ => out.push(Move::with_piece(from, to, piece, &game_state.board)),
        }
    }
}

/// Walk each direction until the edge, an ally, or the first enemy (inclusive).
#[inline]
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(Move::with_piece(from, to, piece, &game_state.board)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        out.push(Move::with_piece(from, to, piece, &game_state.board));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
