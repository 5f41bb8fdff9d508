//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search walks the tree on the caller's `GameState` with apply/reverse,
//! so no positions are cloned. Root moves are shuffled with the engine's own
//! RNG; interior nodes look at captures first.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::game_state::chess_types::*;
use crate::game_state::made_move::MadeMove;
use crate::search::board_scoring::{BoardScorer, PositionalScorer, MATE_SCORE};

/// Finite search bound; strictly wider than any mate score.
pub const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// `None` seeds the root shuffle from the operating system.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

pub struct SearchEngine<S: BoardScorer = PositionalScorer> {
    config: SearchConfig,
    scorer: S,
    rng: StdRng,
    nodes: u64,
}

impl SearchEngine<PositionalScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, PositionalScorer)
    }
}

impl Default for SearchEngine<PositionalScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> SearchEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            config,
            scorer,
            rng: rng_for(config.seed),
            nodes: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Restart the root shuffle sequence.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
        self.rng = rng_for(seed);
    }

    /// Nodes visited by the most recent search.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best of `legal_moves` for the side to move in `game_state`.
    ///
    /// `best_move` is `None` only when `legal_moves` is empty. Ties go to the
    /// first move in shuffled order. The state is restored before returning.
    pub fn find_best_move(
        &mut self,
        game_state: &mut GameState,
        mut legal_moves: Vec<Move>,
    ) -> SearchResult {
        self.nodes = 0;
        legal_moves.shuffle(&mut self.rng);

        // Depth 0 behaves like depth 1: one static evaluation per root move.
        let depth = self.config.depth.max(1);

        let mut best_move = None;
        let mut best_score = -SCORE_INFINITY;
        let mut alpha = -SCORE_INFINITY;
        let beta = SCORE_INFINITY;

        for mv in &legal_moves {
            let score = {
                let mut child = MadeMove::new(game_state, mv);
                -self.negamax(&mut child, depth - 1, -beta, -alpha, 1)
            };
            trace!(mv = %mv, score, "root move scored");

            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            alpha = alpha.max(best_score);
        }

        debug!(
            depth,
            nodes = self.nodes,
            score = best_score,
            best_move = ?best_move.map(|mv| mv.notation()),
            "search complete"
        );

        SearchResult {
            best_move,
            best_score,
            nodes: self.nodes,
        }
    }

    /// Score of `game_state` for the side to move, searched `depth` plies deep.
    ///
    /// `ply` is the distance from the root and makes nearer mates score higher.
    pub fn negamax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.leaf_score(game_state, ply);
        }

        let mut moves = game_state.legal_moves();
        if moves.is_empty() {
            return terminal_score(game_state, ply);
        }

        // Stable: captures first, generation order otherwise.
        moves.sort_by_key(|mv| !mv.is_capture());

        let mut max_score = -SCORE_INFINITY;
        for mv in &moves {
            let score = {
                let mut child = MadeMove::new(game_state, mv);
                -self.negamax(&mut child, depth - 1, -beta, -alpha, ply.saturating_add(1))
            };

            max_score = max_score.max(score);
            alpha = alpha.max(max_score);
            if alpha >= beta {
                break;
            }
        }

        max_score
    }

    /// Plain negamax without pruning; returns the same value as a full-window
    /// [`SearchEngine::negamax`] call.
    pub fn negamax_full_width(&mut self, game_state: &mut GameState, depth: u8, ply: u8) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.leaf_score(game_state, ply);
        }

        let moves = game_state.legal_moves();
        if moves.is_empty() {
            return terminal_score(game_state, ply);
        }

        let mut max_score = -SCORE_INFINITY;
        for mv in &moves {
            let mut child = MadeMove::new(game_state, mv);
            let score = -self.negamax_full_width(&mut child, depth - 1, ply.saturating_add(1));
            max_score = max_score.max(score);
        }

        max_score
    }

    fn leaf_score(&mut self, game_state: &mut GameState, ply: u8) -> i32 {
        let score = self.scorer.score(game_state);
        if score == -MATE_SCORE {
            -MATE_SCORE + i32::from(ply)
        } else {
            score
        }
    }
}

fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if game_state.is_checkmate() {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchConfig, SearchEngine, SCORE_INFINITY};
    use crate::game_state::chess_types::*;
    use crate::game_state::made_move::MadeMove;
    use crate::search::board_scoring::{BoardScorer, MaterialScorer, PositionalScorer, MATE_SCORE};
    use crate::utils::board_diagram::board_from_diagram;
    use crate::utils::long_algebraic::play_long_algebraic;

    fn load(diagram: &str, side: Color) -> GameState {
        let board = board_from_diagram(diagram).expect("diagram should parse");
        GameState::from_position(board, side, CastleRights::NONE).expect("position should load")
    }

    fn seeded(depth: u8) -> SearchEngine {
        SearchEngine::new(SearchConfig {
            depth,
            seed: Some(7),
        })
    }

    const MATE_IN_ONE: &str = "......k.\n\
                               .....Q..\n\
                               ......K.\n\
                               ........\n\
                               ........\n\
                               ........\n\
                               ........\n\
                               ........";

    #[test]
    fn empty_move_list_returns_no_move() {
        let mut game = GameState::new();
        let result = seeded(2).find_best_move(&mut game, Vec::new());
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, -SCORE_INFINITY);
    }

    #[test]
    fn search_restores_the_position() {
        let mut game = GameState::new();
        play_long_algebraic(&mut game, &["e2e4", "c7c5", "e4e5", "d7d5"])
            .expect("opening sequence should be legal");
        let before = game.clone();

        let legal = game.legal_moves();
        let result = seeded(3).find_best_move(&mut game, legal.clone());
        assert!(legal.contains(&result.best_move.expect("a move should be chosen")));

        game.checkmate = before.checkmate;
        game.stalemate = before.stalemate;
        assert_eq!(game, before);
    }

    #[test]
    fn depth_zero_picks_the_best_immediate_evaluation() {
        let mut game = GameState::new();
        play_long_algebraic(&mut game, &["e2e4", "d7d5"]).expect("opening should be legal");

        let legal = game.legal_moves();
        let expected = legal
            .iter()
            .map(|mv| {
                let mut child = MadeMove::new(&mut game, mv);
                -PositionalScorer.score(&mut child)
            })
            .max()
            .expect("position has legal moves");

        let result = seeded(0).find_best_move(&mut game, legal);
        assert_eq!(result.best_score, expected);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn same_seed_gives_the_same_choice() {
        let mut game = GameState::new();
        let legal = game.legal_moves();

        let first = seeded(2).find_best_move(&mut game, legal.clone());
        let second = seeded(2).find_best_move(&mut game, legal);
        assert_eq!(first, second);
    }

    #[test]
    fn alpha_beta_matches_full_width() {
        let mut game = GameState::new();
        play_long_algebraic(&mut game, &["e2e4", "d7d5", "b1c3", "g8f6"])
            .expect("opening sequence should be legal");

        for depth in 1..=3 {
            let mut engine = SearchEngine::with_scorer(
                SearchConfig {
                    depth,
                    seed: Some(11),
                },
                MaterialScorer,
            );
            let pruned = engine.negamax(&mut game, depth, -SCORE_INFINITY, SCORE_INFINITY, 0);
            let pruned_nodes = engine.nodes();

            let mut full_width = SearchEngine::with_scorer(SearchConfig::default(), MaterialScorer);
            let exact = full_width.negamax_full_width(&mut game, depth, 0);

            assert_eq!(pruned, exact, "depth {depth}");
            assert!(pruned_nodes <= full_width.nodes());

            let legal = game.legal_moves();
            let root = engine.find_best_move(&mut game, legal);
            assert_eq!(root.best_score, exact, "root depth {depth}");
        }
    }

    #[test]
    fn finds_mate_in_one() {
        let mut game = load(MATE_IN_ONE, Color::Light);
        let legal = game.legal_moves();

        let result = seeded(1).find_best_move(&mut game, legal);
        assert_eq!(result.best_score, MATE_SCORE - 1);

        let best = result.best_move.expect("a mating move should be chosen");
        game.apply_move(&best);
        assert!(game.legal_moves().is_empty());
        assert!(game.is_checkmate());
    }

    #[test]
    fn deeper_search_still_prefers_the_immediate_mate() {
        let mut game = load(MATE_IN_ONE, Color::Light);
        let legal = game.legal_moves();

        let result = seeded(3).find_best_move(&mut game, legal);
        assert_eq!(result.best_score, MATE_SCORE - 1);
    }

    #[test]
    fn mated_side_still_gets_a_move_when_all_lose() {
        // Dark to move, every reply allows mate next ply.
        let mut game = load(
            "k.......\n\
             ........\n\
             .K......\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .......Q",
            Color::Dark,
        );
        let legal = game.legal_moves();
        assert!(!legal.is_empty());

        let result = seeded(2).find_best_move(&mut game, legal);
        assert!(result.best_move.is_some());
        assert!(result.best_score <= -MATE_SCORE + 2);
    }
}
