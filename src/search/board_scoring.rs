//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::chess_types::*;
use crate::search::piece_square_tables::placement_bonus;

/// Score of a side that has been checkmated, from its own point of view.
pub const MATE_SCORE: i32 = 100_000;

/// Non-king, non-queen material below which a side counts as thin.
pub const ENDGAME_MATERIAL_THRESHOLD: i32 = 1300;

/// Weight of one legal move in the mobility differential.
pub const MOBILITY_WEIGHT: i32 = 1;

pub trait BoardScorer {
    /// Score from the perspective of the side to move.
    ///
    /// May probe the state (for example to count legal moves) but must leave
    /// it exactly as it found it.
    fn score(&self, game_state: &mut GameState) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 9000,
    }
}

/// Coarse phase test used to pick the king table.
///
/// True when neither side has a queen, or when both sides hold less than
/// [`ENDGAME_MATERIAL_THRESHOLD`] in pawns and minor/major pieces other than queens.
pub fn is_endgame(board: &Board) -> bool {
    let mut has_queen = [false; 2];
    let mut material = [0i32; 2];

    for (_, piece) in occupied_squares(board) {
        match piece.kind {
            PieceKind::Queen => has_queen[piece.color.index()] = true,
            PieceKind::King => {}
            kind => material[piece.color.index()] += piece_value(kind),
        }
    }

    if !has_queen[0] && !has_queen[1] {
        return true;
    }

    material[0] < ENDGAME_MATERIAL_THRESHOLD && material[1] < ENDGAME_MATERIAL_THRESHOLD
}

/// Material plus piece-square placement, light minus dark.
pub fn material_and_placement(board: &Board) -> i32 {
    let endgame = is_endgame(board);
    occupied_squares(board)
        .map(|(square, piece)| {
            piece.color.sign() * (piece_value(piece.kind) + placement_bonus(piece, square, endgame))
        })
        .sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    fn material_balance_light_minus_dark(board: &Board) -> i32 {
        occupied_squares(board)
            .map(|(_, piece)| piece.color.sign() * piece_value(piece.kind))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        game_state.side_to_move.sign() * Self::material_balance_light_minus_dark(&game_state.board)
    }
}

/// Material, piece-square tables and mobility.
///
/// Counting legal moves refreshes the terminal flags for the exact position
/// being scored, so mate and stalemate are recognised here as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    fn opponent_move_count(game_state: &mut GameState) -> i32 {
        let saved_flags = (game_state.checkmate, game_state.stalemate);

        game_state.side_to_move = game_state.side_to_move.opposite();
        let count = game_state.legal_moves().len() as i32;
        game_state.side_to_move = game_state.side_to_move.opposite();

        (game_state.checkmate, game_state.stalemate) = saved_flags;
        count
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &mut GameState) -> i32 {
        let own_moves = game_state.legal_moves().len() as i32;
        if game_state.checkmate {
            return -MATE_SCORE;
        }
        if game_state.stalemate {
            return 0;
        }

        let sign = game_state.side_to_move.sign();
        let opponent_moves = Self::opponent_move_count(game_state);

        let mut score = material_and_placement(&game_state.board);
        score += sign * (own_moves - opponent_moves) * MOBILITY_WEIGHT;

        sign * score
    }
}
