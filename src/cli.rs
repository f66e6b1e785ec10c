//! Command-line interface and game configuration

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::board::Mark;
use crate::ui::GameMode;

/// Delay before the AI answers a human move
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Tic-tac-toe against a perfect-play AI
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark played by the human (X moves first)
    #[arg(long, value_enum, default_value_t = HumanMark::X)]
    pub human: HumanMark,

    /// Two humans on one screen, no AI
    #[arg(long, conflicts_with = "human")]
    pub pvp: bool,

    /// Milliseconds to wait before the AI replies
    #[arg(long, default_value_t = DEFAULT_AI_DELAY_MS)]
    pub ai_delay_ms: u64,

    /// Log filter directive, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

/// Mark choice accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanMark {
    X,
    O,
}

impl From<HumanMark> for Mark {
    fn from(mark: HumanMark) -> Self {
        match mark {
            HumanMark::X => Mark::X,
            HumanMark::O => Mark::O,
        }
    }
}

/// Settings for one run of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub ai_delay: Duration,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
            log_filter: "info".to_string(),
        }
    }
}

impl Cli {
    pub fn into_config(self) -> GameConfig {
        let mode = if self.pvp {
            GameMode::PvP
        } else {
            GameMode::PvE {
                human: self.human.into(),
            }
        };
        GameConfig {
            mode,
            ai_delay: Duration::from_millis(self.ai_delay_ms),
            log_filter: self.log_filter,
        }
    }
}
