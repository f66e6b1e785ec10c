//! Error types for the tic-tac-toe crate
//!
//! The search itself is total and never fails; these errors come from board
//! parsing and from the game loop rejecting a move.

use thiserror::Error;

use crate::board::Mark;

/// Main error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidMarkCounts { x_count: usize, o_count: usize },

    #[error("position {index} is out of bounds (must be 0-8)")]
    PositionOutOfBounds { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game is over")]
    GameOver,

    #[error("not your turn ({to_move} to move)")]
    NotYourTurn { to_move: Mark },

    #[error("AI is thinking")]
    AiThinking,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
