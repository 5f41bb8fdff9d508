//! Core mutable game state.
//!
//! `GameState` is the central model for the engine. It owns the mailbox board,
//! turn and terminal flags, cached king squares, and the two history stacks
//! (moves and castle-rights snapshots) that make apply/reverse exact.
//!
//! Move application lives in `move_generation::legal_move_apply` and move
//! generation in `move_generation::legal_move_generator`; both extend this type.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{king_home, CastleSide, CASTLE_LANES, STARTING_BOARD};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // King square caches, kept in sync by apply/reverse.
    pub light_king_square: Square,
    pub dark_king_square: Square,

    // --- History stacks (push/pop only) ---
    pub move_log: Vec<Move>,
    /// Rights in force after each logged move; same length as `move_log`.
    pub castle_rights_log: Vec<CastleRights>,
    /// Rights in force before the first logged move.
    pub starting_castle_rights: CastleRights,

    pub castle_rights: CastleRights,
    pub en_passant_target: Option<Square>,

    // Valid only right after `legal_moves`.
    pub checkmate: bool,
    pub stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, light to move, full castle rights.
    pub fn new() -> Self {
        Self {
            board: STARTING_BOARD,
            side_to_move: Color::Light,
            light_king_square: king_home(Color::Light),
            dark_king_square: king_home(Color::Dark),
            move_log: Vec::with_capacity(256),
            castle_rights_log: Vec::with_capacity(256),
            starting_castle_rights: CastleRights::ALL,
            castle_rights: CastleRights::ALL,
            en_passant_target: None,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Set up an arbitrary position with an empty history.
    ///
    /// Each side must have exactly one king. Rights whose king or rook is not on
    /// its home square are dropped.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
    ) -> ChessResult<Self> {
        let light_king_square = find_single_king(&board, Color::Light)?;
        let dark_king_square = find_single_king(&board, Color::Dark)?;

        let mut rights = castle_rights;
        for color in [Color::Light, Color::Dark] {
            let home = king_home(color);
            if piece_at(&board, home) != Some(Piece::new(color, PieceKind::King)) {
                rights.revoke_king(color);
                continue;
            }
            for lane in CASTLE_LANES.iter() {
                let corner = Square::new(home.row, lane.rook_from_col);
                if piece_at(&board, corner) != Some(Piece::new(color, PieceKind::Rook)) {
                    rights.revoke_corner(corner);
                }
            }
        }

        Ok(Self {
            board,
            side_to_move,
            light_king_square,
            dark_king_square,
            move_log: Vec::new(),
            castle_rights_log: Vec::new(),
            starting_castle_rights: rights,
            castle_rights: rights,
            en_passant_target: None,
            checkmate: false,
            stalemate: false,
        })
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        piece_at(&self.board, square)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::Light => self.light_king_square,
            Color::Dark => self.dark_king_square,
        }
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Number of plies applied since the state was created.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.move_log.len()
    }

    /// Whether `color` may still castle towards `side` (rights only, not legality).
    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castle_rights.allows(color, side)
    }
}

fn find_single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let mut kings = occupied_squares(board).filter(|(_, piece)| piece.is(color, PieceKind::King));
    let first = kings
        .next()
        .ok_or_else(|| ChessError::InvalidPosition(format!("no {color:?} king on the board")))?;
    if kings.next().is_some() {
        return Err(ChessError::InvalidPosition(format!(
            "more than one {color:?} king on the board"
        )));
    }
    Ok(first.0)
}
