//! Game rules for tic-tac-toe
//!
//! This module implements the outcome evaluation used by both the search and
//! the game loop:
//! - Win detection over the 8 fixed lines
//! - Full-board (draw) detection and terminal test
//! - Derived game status

pub mod status;
pub mod win;

// Re-exports for convenient access
pub use status::{game_status, is_full, is_terminal, GameStatus};
pub use win::{has_won, winner, winning_line, WIN_PATTERNS};
