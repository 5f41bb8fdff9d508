use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(game_state, from, piece, &BISHOP_DIRECTIONS, out);
}
