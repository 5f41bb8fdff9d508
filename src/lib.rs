//! Crate root module declarations for the negamax chess engine.
//!
//! This file exposes the rules engine (game state, move tables, legal move
//! generation), the evaluator and search, the engine adapters, and utility
//! helpers so the driver binary, tests and benches share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod castle_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod made_move;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod rook_moves;
    pub mod target_list;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_diagram;
    pub mod engine_match_harness;
    pub mod long_algebraic;
    pub mod render_game_state;
}
