//! Exhaustive minimax search
//!
//! Scores are always from O's point of view: O completing a line is
//! [`WIN_SCORE`], X completing a line is [`LOSS_SCORE`], a full board with no
//! line is [`DRAW_SCORE`]. O maximizes, X minimizes.
//!
//! The search walks one board buffer in place. Each candidate is placed
//! through [`Board::place_scoped`], so the cell is cleared again when the
//! child evaluation returns, whichever path it returns on.
//!
//! Candidates are tried in ascending cell order and the first candidate with
//! the best score is kept, which makes the chosen move deterministic.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::best_move;
//!
//! // X threatens the top row, O must block
//! let board: Board = "XX./.O./...".parse().unwrap();
//!
//! let result = best_move(&board, Mark::O);
//! assert_eq!(result.best_move, Some(2));
//! assert_eq!(board.get(2), Mark::Empty);
//! ```

use tracing::trace;

use crate::board::{Board, Mark, TOTAL_CELLS};
use crate::rules::{has_won, is_full};

/// Score of a position O has won
pub const WIN_SCORE: i32 = 10;
/// Score of a position X has won
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// A candidate cell and the score it leads to under perfect play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub index: usize,
    pub score: i32,
}

/// Outcome of evaluating one node of the game tree.
///
/// `best_move` is `None` at a terminal node, where only the score is
/// meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
    pub best_move: Option<usize>,
    pub score: i32,
}

impl Evaluation {
    #[inline]
    fn terminal(score: i32) -> Self {
        Self {
            best_move: None,
            score,
        }
    }
}

/// Search result for a root position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen cell, `None` when the root is already terminal
    pub best_move: Option<usize>,
    /// Game-theoretic value of the root (O's point of view)
    pub score: i32,
    /// Every root candidate in ascending cell order
    pub candidates: Vec<Move>,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Score of a terminal position, `None` if play continues.
///
/// X's line is checked before O's.
#[inline]
pub fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, Mark::X) {
        Some(LOSS_SCORE)
    } else if has_won(board, Mark::O) {
        Some(WIN_SCORE)
    } else if is_full(board) {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

/// Evaluate `board` with `player` to move, mutating it in place during the
/// search. The board holds the same cells again when this returns.
pub fn minimax(board: &mut Board, player: Mark) -> Evaluation {
    Searcher::new().minimax(board, player)
}

/// Find the best move for `player` on a copy of `board`.
///
/// The caller's board is never touched.
#[must_use]
pub fn best_move(board: &Board, player: Mark) -> SearchResult {
    Searcher::new().search(board, player)
}

/// Minimax searcher with node counting
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search the root position on its own board copy.
    #[must_use]
    pub fn search(&mut self, board: &Board, player: Mark) -> SearchResult {
        self.nodes = 1;
        let mut work_board = *board;

        if let Some(score) = terminal_score(&work_board) {
            return SearchResult {
                best_move: None,
                score,
                candidates: Vec::new(),
                nodes: self.nodes,
            };
        }
        if player == Mark::Empty {
            return SearchResult {
                best_move: None,
                score: DRAW_SCORE,
                candidates: Vec::new(),
                nodes: self.nodes,
            };
        }

        let candidates = self.score_candidates(&mut work_board, player);
        for candidate in &candidates {
            trace!(index = candidate.index, score = candidate.score, "root candidate");
        }
        let chosen = select(&candidates, player);

        SearchResult {
            best_move: chosen.best_move,
            score: chosen.score,
            candidates,
            nodes: self.nodes,
        }
    }

    /// Evaluate a node in place.
    ///
    /// A `player` of `Mark::Empty` has no moves; the node then evaluates as
    /// its terminal score, or a draw if play could continue.
    pub fn minimax(&mut self, board: &mut Board, player: Mark) -> Evaluation {
        self.nodes += 1;

        if let Some(score) = terminal_score(board) {
            return Evaluation::terminal(score);
        }
        if player == Mark::Empty {
            return Evaluation::terminal(DRAW_SCORE);
        }

        let candidates = self.score_candidates(board, player);
        select(&candidates, player)
    }

    /// Score every empty cell for `player`, ascending by index
    fn score_candidates(&mut self, board: &mut Board, player: Mark) -> Vec<Move> {
        let open: Vec<usize> = board.empty_cells().collect();
        let mut moves = Vec::with_capacity(TOTAL_CELLS);

        for index in open {
            let mut child = board.place_scoped(index, player);
            let score = self.minimax(&mut child, player.opponent()).score;
            moves.push(Move { index, score });
        }

        moves
    }
}

/// Pick the maximum (O) or minimum (X) score, first candidate on ties
fn select(candidates: &[Move], player: Mark) -> Evaluation {
    let maximizing = player == Mark::O;
    let mut best: Option<Move> = None;

    for &candidate in candidates {
        let better = match best {
            None => true,
            Some(current) if maximizing => candidate.score > current.score,
            Some(current) => candidate.score < current.score,
        };
        if better {
            best = Some(candidate);
        }
    }

    match best {
        Some(chosen) => Evaluation {
            best_move: Some(chosen.index),
            score: chosen.score,
        },
        // Only reachable with no open cells, which is terminal
        None => Evaluation::terminal(DRAW_SCORE),
    }
}
