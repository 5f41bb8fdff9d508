//! Single-ply move record.
//!
//! A `Move` captures everything needed to apply and later reverse one ply on
//! the mailbox board. Two moves compare equal when their start/end squares
//! match, which is how raw input coordinates are matched against the legal
//! move list.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the passed pawn, although `end` was empty.
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Build a move for a known moving piece, reading the capture from `board`.
    #[inline]
    pub fn with_piece(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == promotion_row(piece_moved.color);
        Self {
            start,
            end,
            piece_moved,
            piece_captured: piece_at(board, end),
            is_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// En-passant capture; the captured pawn is the opponent's regardless of `end`.
    #[inline]
    pub fn en_passant(start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn)),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Two-square king move that also relocates a rook.
    #[inline]
    pub fn castle(start: Square, end: Square, king: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: king,
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Translate a pair of clicked/typed squares into a candidate move.
    ///
    /// Returns `None` when `start` is empty. The result carries no special-move
    /// flags; match it against `GameState::legal_moves` and apply the matched
    /// entry instead.
    pub fn from_squares(start: Square, end: Square, board: &Board) -> Option<Self> {
        piece_at(board, start).map(|piece| Self::with_piece(start, end, piece, board))
    }

    /// Identifier that defines equality: `start.row*1000 + start.col*100 + end.row*10 + end.col`.
    #[inline]
    pub const fn id(&self) -> u16 {
        self.start.row as u16 * 1000
            + self.start.col as u16 * 100
            + self.end.row as u16 * 10
            + self.end.col as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// True for a pawn advancing two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    /// Coordinate notation such as `e2e4`.
    pub fn notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
