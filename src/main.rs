//! Tic-tac-toe GUI
//!
//! Play against the minimax AI or against another player on the same screen.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::cli::Cli;
use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    let config = Cli::parse().into_config();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!(mode = ?config.mode, ai_delay = ?config.ai_delay, "starting tic-tac-toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_min_inner_size([560.0, 380.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )
}
