//! Tic-tac-toe with a perfect-play AI opponent
//!
//! A 3x3 tic-tac-toe engine whose computer player picks moves by exhaustive
//! minimax search:
//! - X moves first, turns alternate
//! - Three in a row, column or diagonal wins
//! - A full board without a line is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and text notation
//! - [`rules`]: Win, draw and status detection
//! - [`search`]: Exhaustive minimax search
//! - [`engine`]: Entry point used by the game loop
//! - [`ui`]: egui front end and game state
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Board, Engine, Mark};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::new();
//!
//! // Human plays X in the center
//! board.place(4, Mark::X);
//!
//! // AI responds as O
//! if let Some(index) = engine.get_move(&board, Mark::O) {
//!     board.place(index, Mark::O);
//!     println!("AI plays at {index}");
//! }
//! ```
//!
//! # Scoring
//!
//! Scores are from O's point of view: +10 when O wins, -10 when X wins,
//! 0 for a draw. O maximizes, X minimizes.

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{Engine, MoveResult, SearchType};
pub use error::{Error, Result};
pub use rules::GameStatus;
