//! Main AI engine: the single entry point used by the game loop
//!
//! The engine answers one question: which cell should `mark` take on this
//! board. The search follows a priority system:
//!
//! 1. **Immediate win**: a cell that completes a line for `mark` right now
//! 2. **Minimax**: exhaustive search of every continuation
//!
//! Both steps return moves that are optimal under perfect play; the first
//! only makes the engine finish the game as soon as it can instead of
//! taking an equally winning but longer line.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Engine, Mark};
//!
//! let mut engine = Engine::new();
//! let board: Board = "XX./OO./...".parse().unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Mark::O);
//! assert_eq!(result.best_move, Some(5));
//! assert_eq!(result.score, 10);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, warn};

use crate::board::{Board, Mark};
use crate::rules::has_won;
use crate::search::{terminal_score, SearchResult, Searcher, LOSS_SCORE, WIN_SCORE};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Found a move that completes a line
    ImmediateWin,
    /// Regular minimax search result
    Minimax,
    /// Board was already decided, no move to make
    Terminal,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best cell found, if any
    pub best_move: Option<usize>,
    /// Game-theoretic value after the move (O's point of view)
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(index: usize, mark: Mark, time_ms: u64) -> Self {
        Self {
            best_move: Some(index),
            score: if mark == Mark::O { WIN_SCORE } else { LOSS_SCORE },
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_minimax(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::Minimax,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn terminal(score: i32, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score,
            search_type: SearchType::Terminal,
            time_ms,
            nodes: 1,
        }
    }
}

/// Perfect-play tic-tac-toe engine.
///
/// Holds no game state; every call works on a private copy of the board it
/// is given, so the caller's board never changes and separate engines can
/// search concurrently.
#[derive(Debug, Default)]
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Get the best cell for `mark`.
    ///
    /// Returns `None` when the board is already won or full. The game loop
    /// is expected not to ask in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe::{Board, Engine, Mark};
    ///
    /// let mut engine = Engine::new();
    /// let mut board = Board::new();
    /// board.place(4, Mark::X);
    ///
    /// if let Some(index) = engine.get_move(&board, Mark::O) {
    ///     board.place(index, Mark::O);
    /// }
    /// assert_eq!(board.mark_count(), 2);
    /// ```
    #[must_use]
    pub fn get_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Get the best cell with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, mark: Mark) -> MoveResult {
        let start = Instant::now();

        if let Some(score) = terminal_score(board) {
            warn!(%mark, score, "search requested on a finished board");
            return MoveResult::terminal(score, elapsed_ms(start));
        }
        if let Err(err) = board.validate() {
            warn!(%err, "searching a board that breaks turn order");
        }

        // 1. Complete a line if possible
        if let Some(index) = find_immediate_win(board, mark) {
            let result = MoveResult::immediate_win(index, mark, elapsed_ms(start));
            debug!(%mark, index, score = result.score, "immediate win");
            return result;
        }

        // 2. Full minimax search
        let result = MoveResult::from_minimax(self.searcher.search(board, mark), elapsed_ms(start));
        debug!(
            %mark,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "minimax search finished"
        );
        result
    }
}

/// Lowest empty cell that completes a line for `mark`
pub fn find_immediate_win(board: &Board, mark: Mark) -> Option<usize> {
    if mark == Mark::Empty {
        return None;
    }
    let mut work_board = *board;
    let open: Vec<usize> = work_board.empty_cells().collect();
    open.into_iter().find(|&index| {
        let placed = work_board.place_scoped(index, mark);
        has_won(&placed, mark)
    })
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DRAW_SCORE;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_immediate_win_preferred() {
        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&board("XX./OO./..."), Mark::O);
        assert_eq!(result.best_move, Some(5));
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_immediate_win_for_x() {
        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&board("XX./OO./..."), Mark::X);
        assert_eq!(result.best_move, Some(2));
        assert_eq!(result.score, LOSS_SCORE);
    }

    #[test]
    fn test_falls_back_to_minimax() {
        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&board("XX./.O./..."), Mark::O);
        assert_eq!(result.search_type, SearchType::Minimax);
        assert_eq!(result.best_move, Some(2));
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_empty_board_draw() {
        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&Board::new(), Mark::X);
        assert!(result.best_move.is_some());
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn test_terminal_board_no_move() {
        let mut engine = Engine::new();
        let won = board("XO./OX./..X");
        let result = engine.get_move_with_stats(&won, Mark::O);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, LOSS_SCORE);
        assert_eq!(result.search_type, SearchType::Terminal);

        let full = board("XOX/XOO/OXX");
        assert_eq!(engine.get_move(&full, Mark::O), None);
    }

    #[test]
    fn test_board_unchanged() {
        let mut engine = Engine::new();
        let b = board("X../.O./..X");
        let before = b;
        let _ = engine.get_move(&b, Mark::O);
        assert_eq!(b, before);
    }

    #[test]
    fn test_find_immediate_win() {
        assert_eq!(find_immediate_win(&board("XX./OO./..."), Mark::O), Some(5));
        assert_eq!(find_immediate_win(&board("XX./OO./..."), Mark::X), Some(2));
        assert_eq!(find_immediate_win(&Board::new(), Mark::X), None);
        assert_eq!(find_immediate_win(&Board::new(), Mark::Empty), None);
    }
}
