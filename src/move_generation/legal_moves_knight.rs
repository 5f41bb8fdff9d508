use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_step_moves(game_state, from, piece, knight_targets(from), out);
}
