//! Win condition checking
//!
//! A mark wins by holding all three cells of a row, column or diagonal.

use crate::board::{Board, Mark};

/// The 8 winning lines as board indices: rows, columns, diagonals
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if `mark` holds a complete line.
///
/// Always false for `Mark::Empty`.
#[inline]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

/// First line (in `WIN_PATTERNS` order) completed by `mark`, if any
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }
    WIN_PATTERNS
        .iter()
        .find(|line| line.iter().all(|&idx| board.get(idx) == mark))
        .copied()
}

/// Check for a winner
///
/// Returns `Some(mark)` if a mark has three in a row, X checked first.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}
