//! Error type for the fallible edges of the crate.
//!
//! The rules engine and the search are infallible by construction: reversing
//! an empty history is a no-op and terminal positions are flags, not errors.
//! `ChessError` covers what sits around them: notation parsing, position
//! setup from a board diagram, and engine/driver plumbing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),

    /// Move text was not four coordinate characters such as `e2e4`.
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    /// Well-formed move text that matches no legal move in the position.
    #[error("move {0} is not legal in this position")]
    IllegalMove(String),

    /// A board diagram line or cell could not be read.
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    /// A set-up position breaks a board invariant (for example a missing king).
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// An engine declined to move although legal moves existed.
    #[error("engine {engine} returned no move with {legal_moves} legal moves available")]
    EngineReturnedNoMove { engine: String, legal_moves: usize },

    /// An engine proposed a move absent from the legal list.
    #[error("engine {engine} returned illegal move {mv}")]
    EngineReturnedIllegalMove { engine: String, mv: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
