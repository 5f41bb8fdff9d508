//! Engine abstraction layer used by the match harness and the driver.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::errors::ChessResult;
use crate::game_state::chess_types::{GameState, Move};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this call only.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn new_game(&mut self) {}

    fn name(&self) -> &str;

    /// Choose a move for the side to move.
    ///
    /// The engine may search on `game_state` but must hand it back unchanged;
    /// applying the chosen move is the caller's job.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
