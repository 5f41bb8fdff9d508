use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Queen moves are the union of rook and bishop rays.
pub fn generate_queen_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, piece, &ROOK_DIRECTIONS, out);
    push_ray_moves(game_state, from, piece, &BISHOP_DIRECTIONS, out);
}
