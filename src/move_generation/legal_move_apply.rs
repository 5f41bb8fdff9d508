//! Reversible move application.
//!
//! `apply_move` and `reverse_move` are the only entry points that mutate a
//! `GameState`. Every applied move pushes one entry on each history stack and
//! every reversal pops one from each, so the two stacks never drift apart.

use crate::game_state::chess_rules::castle_lane_for;
use crate::game_state::chess_types::*;

impl GameState {
    /// Apply `mv` to the board and push it on the history stacks.
    ///
    /// `mv` is expected to come from `legal_moves` (or the pseudo-legal
    /// generator while probing); nothing is validated here.
    pub fn apply_move(&mut self, mv: &Move) {
        set_piece_at(&mut self.board, mv.start, None);
        set_piece_at(&mut self.board, mv.end, Some(mv.piece_moved));
        self.move_log.push(*mv);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.end);
        }

        if mv.is_promotion {
            let queen = Piece::new(mv.piece_moved.color, PieceKind::Queen);
            set_piece_at(&mut self.board, mv.end, Some(queen));
        }

        if mv.is_en_passant {
            set_piece_at(&mut self.board, en_passant_victim_square(mv), None);
        }

        if mv.is_castle {
            if let Some(lane) = castle_lane_for(mv.end.col) {
                let rook_from = Square::new(mv.end.row, lane.rook_from_col);
                let rook_to = Square::new(mv.end.row, lane.rook_to_col);
                let rook = piece_at(&self.board, rook_from);
                set_piece_at(&mut self.board, rook_to, rook);
                set_piece_at(&mut self.board, rook_from, None);
            }
        }

        self.en_passant_target = en_passant_target_after(Some(mv));

        update_castle_rights(&mut self.castle_rights, mv);
        self.castle_rights_log.push(self.castle_rights);
    }

    /// Undo the most recent move. Does nothing when the history is empty.
    pub fn reverse_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };

        set_piece_at(&mut self.board, mv.start, Some(mv.piece_moved));
        set_piece_at(&mut self.board, mv.end, mv.piece_captured);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            self.set_king_square(mv.piece_moved.color, mv.start);
        }

        if mv.is_en_passant {
            set_piece_at(&mut self.board, mv.end, None);
            set_piece_at(&mut self.board, en_passant_victim_square(&mv), mv.piece_captured);
        }

        self.castle_rights_log.pop();
        self.castle_rights = self
            .castle_rights_log
            .last()
            .copied()
            .unwrap_or(self.starting_castle_rights);

        if mv.is_castle {
            if let Some(lane) = castle_lane_for(mv.end.col) {
                let rook_from = Square::new(mv.end.row, lane.rook_from_col);
                let rook_to = Square::new(mv.end.row, lane.rook_to_col);
                let rook = piece_at(&self.board, rook_to);
                set_piece_at(&mut self.board, rook_from, rook);
                set_piece_at(&mut self.board, rook_to, None);
            }
        }

        self.en_passant_target = en_passant_target_after(self.move_log.last());
    }

    #[inline]
    fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::Light => self.light_king_square = square,
            Color::Dark => self.dark_king_square = square,
        }
    }
}

/// The pawn taken by an en-passant capture sits beside the landing square,
/// on the row the capturing pawn started from.
#[inline]
fn en_passant_victim_square(mv: &Move) -> Square {
    Square::new(mv.start.row, mv.end.col)
}

/// En-passant target implied by the most recent move: the square passed over
/// by a two-square pawn advance, otherwise none.
#[inline]
pub fn en_passant_target_after(last_move: Option<&Move>) -> Option<Square> {
    last_move
        .filter(|mv| mv.is_double_pawn_push())
        .map(|mv| Square::new((mv.start.row + mv.end.row) / 2, mv.end.col))
}

fn update_castle_rights(rights: &mut CastleRights, mv: &Move) {
    match mv.piece_moved.kind {
        PieceKind::King => rights.revoke_king(mv.piece_moved.color),
        PieceKind::Rook => rights.revoke_corner(mv.start),
        _ => {}
    }

    // Capturing a rook on its corner also removes the right.
    if mv.piece_captured.is_some() {
        rights.revoke_corner(mv.end);
    }
}
