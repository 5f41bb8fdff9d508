use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, piece, &ROOK_DIRECTIONS, out);
}
