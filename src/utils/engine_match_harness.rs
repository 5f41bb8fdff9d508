//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other on a
//! single shared `GameState`, validating every returned move against the
//! position's legal moves.

use std::time::Instant;

use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn is_draw(self) -> bool {
        matches!(self, MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies)
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

/// Play a single engine-vs-engine match from the standard start.
///
/// `engine_light` moves first.
pub fn play_engine_match(
    engine_light: Box<dyn Engine>,
    engine_dark: Box<dyn Engine>,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(engine_light, engine_dark, GameState::new(), config)
}

/// Play a single engine-vs-engine match from a caller-provided state.
pub fn play_engine_match_from_state(
    mut engine_light: Box<dyn Engine>,
    mut engine_dark: Box<dyn Engine>,
    mut state: GameState,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    engine_light.new_game();
    engine_dark.new_game();
    info!(
        light = engine_light.name(),
        dark = engine_dark.name(),
        max_plies = config.max_plies,
        "match started"
    );

    let mut played_moves = Vec::<String>::new();
    let mut light_move_count = 0u32;
    let mut dark_move_count = 0u32;
    let mut light_total_time_ns = 0u128;
    let mut dark_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        let legal_moves = state.legal_moves();
        if legal_moves.is_empty() {
            outcome = if state.is_checkmate() {
                match state.side_to_move {
                    Color::Light => MatchOutcome::DarkWinCheckmate,
                    Color::Dark => MatchOutcome::LightWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
            break;
        }

        let mover = state.side_to_move;
        let engine = match mover {
            Color::Light => &mut engine_light,
            Color::Dark => &mut engine_dark,
        };

        let started = Instant::now();
        let out = engine.choose_move(&mut state, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        let chosen = out.best_move.ok_or_else(|| ChessError::EngineReturnedNoMove {
            engine: engine.name().to_owned(),
            legal_moves: legal_moves.len(),
        })?;
        // Match by squares, then play the generator's copy so special-move
        // flags are trusted only from move generation.
        let chosen = legal_moves
            .iter()
            .find(|mv| **mv == chosen)
            .copied()
            .ok_or_else(|| ChessError::EngineReturnedIllegalMove {
                engine: engine.name().to_owned(),
                mv: chosen.notation(),
            })?;

        match mover {
            Color::Light => {
                light_move_count = light_move_count.saturating_add(1);
                light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                dark_move_count = dark_move_count.saturating_add(1);
                dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        debug!(ply = state.ply_count(), mv = %chosen, "engine move played");
        played_moves.push(chosen.notation());
        state.apply_move(&chosen);
    }

    // The ply limit can land exactly on a finished game.
    if outcome == MatchOutcome::DrawMaxPlies && state.legal_moves().is_empty() {
        outcome = if state.is_checkmate() {
            match state.side_to_move {
                Color::Light => MatchOutcome::DarkWinCheckmate,
                Color::Dark => MatchOutcome::LightWinCheckmate,
            }
        } else {
            MatchOutcome::DrawStalemate
        };
    }

    info!(?outcome, plies = played_moves.len(), "match finished");

    Ok(MatchResult {
        outcome,
        final_state: state,
        played_moves,
        light_move_count,
        dark_move_count,
        light_total_time_ns,
        dark_total_time_ns,
    })
}

/// Take back the last turn.
///
/// Against an engine two plies are reversed so the human is to move again.
/// Returns the number of plies actually reversed.
pub fn undo_turn(state: &mut GameState, vs_engine: bool) -> usize {
    let mut undone = 0;
    let plies = if vs_engine { 2 } else { 1 };
    for _ in 0..plies {
        if state.move_log.is_empty() {
            break;
        }
        state.reverse_move();
        undone += 1;
    }
    undone
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, play_engine_match_from_state, undo_turn, MatchConfig, MatchOutcome};
    use crate::engines::engine_negamax::NegamaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
    use crate::errors::{ChessError, ChessResult};
    use crate::game_state::chess_types::*;
    use crate::search::negamax::SearchConfig;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::board_diagram::board_from_diagram;
    use crate::utils::long_algebraic::{parse_long_algebraic, play_long_algebraic};

    /// Always answers with a fixed coordinate move, legal or not.
    struct ScriptedEngine(&'static str);

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(
            &mut self,
            game_state: &mut GameState,
            _params: &GoParams,
        ) -> ChessResult<EngineOutput> {
            let start = algebraic_to_square(&self.0[0..2])?;
            let end = algebraic_to_square(&self.0[2..4])?;
            Ok(EngineOutput {
                best_move: Move::from_squares(start, end, &game_state.board),
                info_lines: Vec::new(),
            })
        }
    }

    struct SilentEngine;

    impl Engine for SilentEngine {
        fn name(&self) -> &str {
            "silent"
        }

        fn choose_move(
            &mut self,
            _game_state: &mut GameState,
            _params: &GoParams,
        ) -> ChessResult<EngineOutput> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn random_match_respects_the_ply_limit() {
        let result = play_engine_match(
            Box::new(RandomEngine::seeded(1)),
            Box::new(RandomEngine::seeded(2)),
            MatchConfig {
                max_plies: 20,
                ..MatchConfig::default()
            },
        )
        .expect("match should complete");

        assert!(result.played_moves.len() <= 20);
        assert_eq!(result.final_state.ply_count(), result.played_moves.len());
        assert_eq!(
            (result.light_move_count + result.dark_move_count) as usize,
            result.played_moves.len()
        );

        // Replaying the record reproduces the final position.
        let mut replay = GameState::new();
        let record: Vec<&str> = result.played_moves.iter().map(String::as_str).collect();
        play_long_algebraic(&mut replay, &record).expect("recorded moves should replay");
        assert_eq!(replay.board, result.final_state.board);
    }

    #[test]
    fn negamax_delivers_mate_in_one() {
        let board = board_from_diagram(
            "......k.\n\
             .....Q..\n\
             ......K.\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........",
        )
        .expect("diagram should parse");
        let state = GameState::from_position(board, Color::Light, CastleRights::NONE)
            .expect("position should load");

        let result = play_engine_match_from_state(
            Box::new(NegamaxEngine::new(SearchConfig {
                depth: 2,
                seed: Some(9),
            })),
            Box::new(RandomEngine::seeded(9)),
            state,
            MatchConfig::default(),
        )
        .expect("match should complete");

        assert_eq!(result.outcome, MatchOutcome::LightWinCheckmate);
        assert_eq!(result.played_moves.len(), 1);
    }

    #[test]
    fn illegal_engine_move_is_rejected() {
        let err = play_engine_match(
            Box::new(ScriptedEngine("e2e5")),
            Box::new(RandomEngine::seeded(2)),
            MatchConfig::default(),
        )
        .expect_err("illegal move should end the match with an error");

        assert_eq!(
            err,
            ChessError::EngineReturnedIllegalMove {
                engine: "scripted".to_owned(),
                mv: "e2e5".to_owned(),
            }
        );
    }

    #[test]
    fn missing_engine_move_is_rejected() {
        let err = play_engine_match(
            Box::new(SilentEngine),
            Box::new(RandomEngine::seeded(2)),
            MatchConfig::default(),
        )
        .expect_err("an engine must answer when moves exist");

        assert!(matches!(
            err,
            ChessError::EngineReturnedNoMove { legal_moves: 20, .. }
        ));
    }

    #[test]
    fn undo_turn_reverses_one_or_two_plies() {
        let mut game = GameState::new();
        play_long_algebraic(&mut game, &["e2e4", "e7e5", "g1f3"]).expect("moves should be legal");

        assert_eq!(undo_turn(&mut game, false), 1);
        assert_eq!(game.ply_count(), 2);
        assert_eq!(game.side_to_move, Color::Light);

        assert_eq!(undo_turn(&mut game, true), 2);
        assert_eq!(game.ply_count(), 0);

        assert_eq!(undo_turn(&mut game, true), 0);

        let legal = game.legal_moves();
        assert!(parse_long_algebraic("e2e4", &legal).is_ok());
        assert!(!MatchOutcome::LightWinCheckmate.is_draw());
    }
}
