//! Draw detection and game status

use crate::board::{Board, Mark};

use super::win::{has_won, winner};

/// Status of a game, always derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Win(Mark),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// True iff no cell is empty
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

/// A position is terminal once either mark has a line or the board is full
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Mark::X) || has_won(board, Mark::O) || is_full(board)
}

/// Derive the status. A full board with a line is a win, not a draw.
pub fn game_status(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Win(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        let b = Board::new();
        assert!(!is_full(&b));
        assert!(!is_terminal(&b));
        assert_eq!(game_status(&b), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XOX/XOO/OXX");
        assert!(is_full(&b));
        assert!(!has_won(&b, Mark::X));
        assert!(!has_won(&b, Mark::O));
        assert!(is_terminal(&b));
        assert_eq!(game_status(&b), GameStatus::Draw);
        assert!(game_status(&b).is_over());
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let b = board("XOX/OXO/OXX");
        assert!(is_full(&b));
        assert_eq!(game_status(&b), GameStatus::Win(Mark::X));
    }

    #[test]
    fn test_diagonal_win_is_terminal() {
        let b = board("XO./OX./..X");
        assert!(has_won(&b, Mark::X));
        assert!(is_terminal(&b));
        assert_eq!(game_status(&b), GameStatus::Win(Mark::X));
    }

    #[test]
    fn test_single_open_cell_not_terminal() {
        let b = board("XOX/OXO/OX.");
        assert!(!is_full(&b));
        assert!(!is_terminal(&b));
        assert!(!game_status(&b).is_over());
    }
}
