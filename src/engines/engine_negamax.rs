//! Negamax alpha-beta engine.
//!
//! Thin adapter from the `Engine` trait onto `SearchEngine`: honours a
//! per-call depth override and reports the search statistics as info lines.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_types::GameState;
use crate::search::negamax::{SearchConfig, SearchEngine};

pub struct NegamaxEngine {
    search: SearchEngine,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: SearchEngine::new(config),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.search.config()
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for NegamaxEngine {
    fn new_game(&mut self) {
        let seed = self.search.config().seed;
        self.search.reseed(seed);
    }

    fn name(&self) -> &str {
        "negamax"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let configured_depth = self.search.config().depth;
        let depth = params.depth.unwrap_or(configured_depth);

        let legal_moves = game_state.legal_moves();
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string negamax_engine legal_moves {}",
            legal_moves.len()
        ));
        out.info_lines
            .push(format!("info string negamax_engine depth {}", depth));

        let fallback = legal_moves.first().copied();

        self.search.set_depth(depth);
        let result = self.search.find_best_move(game_state, legal_moves);
        self.search.set_depth(configured_depth);

        out.info_lines
            .push(format!("info string negamax_engine nodes {}", result.nodes));
        out.info_lines.push(format!(
            "info string negamax_engine score {}",
            result.best_score
        ));

        out.best_move = result.best_move.or(fallback);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::NegamaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::*;
    use crate::search::negamax::SearchConfig;
    use crate::utils::board_diagram::board_from_diagram;

    #[test]
    fn engine_reports_search_statistics() {
        let mut game = GameState::new();
        let mut engine = NegamaxEngine::new(SearchConfig {
            depth: 2,
            seed: Some(5),
        });

        let out = engine
            .choose_move(&mut game, &GoParams::default())
            .expect("engine should not fail");

        assert!(out.best_move.is_some());
        assert_eq!(out.info_lines[0], "info string negamax_engine legal_moves 20");
        assert_eq!(out.info_lines[1], "info string negamax_engine depth 2");
        assert!(out.info_lines[2].starts_with("info string negamax_engine nodes "));
        assert!(out.info_lines[3].starts_with("info string negamax_engine score "));
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn depth_override_applies_to_one_call_only() {
        let mut game = GameState::new();
        let mut engine = NegamaxEngine::new(SearchConfig {
            depth: 3,
            seed: Some(5),
        });

        let out = engine
            .choose_move(&mut game, &GoParams { depth: Some(1) })
            .expect("engine should not fail");
        assert_eq!(out.info_lines[1], "info string negamax_engine depth 1");
        assert_eq!(engine.config().depth, 3);
    }

    #[test]
    fn engine_takes_a_hanging_queen() {
        let board = board_from_diagram(
            "....k...\n\
             ........\n\
             ........\n\
             ...q....\n\
             ........\n\
             ........\n\
             ........\n\
             ...RK...",
        )
        .expect("diagram should parse");
        let mut game = GameState::from_position(board, Color::Light, CastleRights::NONE)
            .expect("position should load");

        let out = NegamaxEngine::new(SearchConfig {
            depth: 2,
            seed: Some(1),
        })
        .choose_move(&mut game, &GoParams::default())
        .expect("engine should not fail");

        assert_eq!(out.best_move.map(|mv| mv.notation()), Some("d1d5".to_owned()));
    }
}
