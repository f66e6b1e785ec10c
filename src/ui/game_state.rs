//! Game state management for the tic-tac-toe GUI
//!
//! `GameState` owns the user-visible board. It only changes when a move is
//! finalized; every AI search runs in a worker thread on its own copy.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::cli::GameConfig;
use crate::error::{Error, Result};
use crate::rules::{game_status, winning_line, GameStatus};
use crate::{Board, Engine, Mark, MoveResult, TOTAL_CELLS};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI; the AI plays the other mark
    PvE { human: Mark },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Mark::X }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub last_move: Option<usize>,
    pub move_history: Vec<(usize, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<usize>,
    pub message: Option<String>,

    ai_delay: Duration,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Mark::X,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            ai_delay: Duration::ZERO,
        }
    }

    pub fn with_config(config: &GameConfig) -> Self {
        let mut state = Self::new(config.mode);
        state.ai_delay = config.ai_delay;
        state
    }

    /// Start over in a mode, keeping the configured AI delay
    pub fn restart(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Mark::X;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        self.message = None;
        info!(mode = ?self.mode, "new game");
    }

    #[inline]
    pub fn ai_delay(&self) -> Duration {
        self.ai_delay
    }

    /// Status derived from the board
    pub fn status(&self) -> GameStatus {
        game_status(&self.board)
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// Cells of the completed line, if the game was won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.status() {
            GameStatus::Win(mark) => winning_line(&self.board, mark),
            _ => None,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the current mark at `index` for the human
    pub fn try_place_mark(&mut self, index: usize) -> Result<()> {
        if self.is_game_over() {
            return Err(Error::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(Error::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(Error::NotYourTurn {
                to_move: self.current_turn,
            });
        }

        if index >= TOTAL_CELLS {
            return Err(Error::PositionOutOfBounds { index });
        }

        if !self.board.is_empty(index) {
            return Err(Error::CellOccupied { index });
        }

        self.execute_move(index);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, index: usize) {
        let mark = self.current_turn;

        self.board.place(index, mark);
        self.move_history.push((index, mark));
        self.last_move = Some(index);
        self.suggested_move = None;
        self.message = None;
        info!(%mark, index, "move");

        match self.status() {
            GameStatus::InProgress => self.current_turn = mark.opponent(),
            GameStatus::Win(winner) => info!(%winner, moves = self.move_history.len(), "game won"),
            GameStatus::Draw => info!(moves = self.move_history.len(), "game drawn"),
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let board = self.board;
        let mark = self.current_turn;
        let delay = self.ai_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let mut engine = Engine::new();
            let result = engine.get_move_with_stats(&board, mark);
            // The game may have been reset meanwhile; nobody is listening then
            let _ = tx.send(result);
        });
        debug!(%mark, ?delay, "AI worker started");

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            debug!(
                best_move = ?move_result.best_move,
                search_type = ?move_result.search_type,
                nodes = move_result.nodes,
                "AI worker finished"
            );
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(index) if self.board.is_empty(index) => self.execute_move(index),
                _ => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side to move
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move. In PvE, also undo the AI's reply so the human is
    /// to move again.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let mut keep = self.move_history.len() - 1;
        if let GameMode::PvE { human } = self.mode {
            while keep > 0 && self.move_history[keep].1 != human {
                keep -= 1;
            }
        }

        let moves: Vec<_> = self.move_history.drain(..keep).collect();

        self.board = Board::new();
        self.current_turn = Mark::X;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;
        self.move_history.clear();

        for (index, mark) in moves {
            self.board.place(index, mark);
            self.move_history.push((index, mark));
            self.last_move = Some(index);
            self.current_turn = mark.opponent();
        }
        debug!(moves = self.move_history.len(), "undo");
    }

    /// One-line status for the side panel
    pub fn status_text(&self) -> String {
        match (self.status(), self.mode) {
            (GameStatus::Win(mark), GameMode::PvE { human }) if mark == human => {
                "You win!".to_string()
            }
            (GameStatus::Win(_), GameMode::PvE { .. }) => "AI wins!".to_string(),
            (GameStatus::Win(mark), GameMode::PvP) => format!("{mark} wins!"),
            (GameStatus::Draw, _) => "It's a draw!".to_string(),
            (GameStatus::InProgress, GameMode::PvE { .. }) if self.is_human_turn() => {
                format!("Your turn ({})", self.current_turn)
            }
            (GameStatus::InProgress, GameMode::PvE { .. }) => {
                format!("AI's turn ({})", self.current_turn)
            }
            (GameStatus::InProgress, GameMode::PvP) => format!("{} to move", self.current_turn),
        }
    }
}
