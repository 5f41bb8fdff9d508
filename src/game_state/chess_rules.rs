//! Canonical chess-rule constants.
//!
//! Starting layout, home squares for kings and rooks, and the square sets that
//! castling inspects.

use crate::game_state::chess_types::*;

const fn light(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::Light, kind))
}

const fn dark(kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(Color::Dark, kind))
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position.
pub const STARTING_BOARD: Board = starting_board();

const fn starting_board() -> Board {
    let mut board = EMPTY_BOARD;
    let mut col = 0usize;
    while col < 8 {
        board[0][col] = dark(BACK_RANK[col]);
        board[1][col] = dark(PieceKind::Pawn);
        board[6][col] = light(PieceKind::Pawn);
        board[7][col] = light(BACK_RANK[col]);
        col += 1;
    }
    board
}

pub const LIGHT_KING_HOME: Square = Square::new(7, 4);
pub const DARK_KING_HOME: Square = Square::new(0, 4);

pub const LIGHT_KINGSIDE_ROOK_HOME: Square = Square::new(7, 7);
pub const LIGHT_QUEENSIDE_ROOK_HOME: Square = Square::new(7, 0);
pub const DARK_KINGSIDE_ROOK_HOME: Square = Square::new(0, 7);
pub const DARK_QUEENSIDE_ROOK_HOME: Square = Square::new(0, 0);

#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::Light => LIGHT_KING_HOME,
        Color::Dark => DARK_KING_HOME,
    }
}

/// Row a pawn of this color starts on.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Row on which a pawn of this color promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Geometry of one castling option, expressed as columns on the back row.
#[derive(Debug, Clone, Copy)]
pub struct CastleLane {
    pub side: CastleSide,
    pub rook_from_col: u8,
    pub rook_to_col: u8,
    pub king_to_col: u8,
    /// Cells between king and rook that must be empty.
    pub empty_cols: &'static [u8],
    /// Cells the king passes through or lands on; none may be attacked.
    pub safe_cols: &'static [u8],
}

pub const CASTLE_LANES: [CastleLane; 2] = [
    CastleLane {
        side: CastleSide::Kingside,
        rook_from_col: 7,
        rook_to_col: 5,
        king_to_col: 6,
        empty_cols: &[5, 6],
        safe_cols: &[5, 6],
    },
    CastleLane {
        side: CastleSide::Queenside,
        rook_from_col: 0,
        rook_to_col: 3,
        king_to_col: 2,
        empty_cols: &[1, 2, 3],
        safe_cols: &[3, 2],
    },
];

/// The castling lane a king move from the home square to `king_to_col` belongs to.
pub fn castle_lane_for(king_to_col: u8) -> Option<&'static CastleLane> {
    CASTLE_LANES
        .iter()
        .find(|lane| lane.king_to_col == king_to_col)
}
