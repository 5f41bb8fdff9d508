//! Full legal move generation pipeline.
//!
//! Dispatches pseudo-legal generation per piece kind, appends castling, then
//! applies each candidate on the shared state, drops those that leave the
//! mover's king attacked, and reverses. The terminal flags are refreshed from
//! the result.

use crate::game_state::chess_types::*;
use crate::game_state::made_move::MadeMove;
use crate::move_generation::legal_move_shared::generator_for;
use crate::move_generation::legal_moves_king::generate_castle_moves;

impl GameState {
    /// Moves obeying piece geometry and occupancy for the side to move,
    /// without castling and without the own-king safety test.
    pub fn generate_pseudo_legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for (from, piece) in occupied_squares(&self.board) {
            if piece.color == self.side_to_move {
                generator_for(piece.kind)(self, from, piece, &mut out);
            }
        }
        out
    }

    /// Legal moves for the side to move; also sets or clears the checkmate and
    /// stalemate flags.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let saved_en_passant = self.en_passant_target;
        let saved_rights = self.castle_rights;

        let mut candidates = self.generate_pseudo_legal_moves();
        generate_castle_moves(self, &mut candidates);

        let mover = self.side_to_move;
        candidates.retain(|mv| {
            let probe = MadeMove::new(self, mv);
            !probe.is_king_attacked(mover)
        });

        if candidates.is_empty() {
            let in_check = self.is_in_check();
            self.checkmate = in_check;
            self.stalemate = !in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        self.en_passant_target = saved_en_passant;
        self.castle_rights = saved_rights;
        candidates
    }

    /// Alias of [`GameState::legal_moves`].
    #[inline]
    pub fn generate_legal_moves(&mut self) -> Vec<Move> {
        self.legal_moves()
    }
}
