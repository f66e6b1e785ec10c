//! Property tests for the outcome rules and the search

use proptest::prelude::*;

use tictactoe::board::{Board, Mark};
use tictactoe::rules::{game_status, has_won, is_full, is_terminal, GameStatus};
use tictactoe::search::{best_move, minimax};
use tictactoe::Engine;

/// Any assignment of marks, reachable or not
fn arbitrary_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![Just(Mark::Empty), Just(Mark::X), Just(Mark::O)])
        .prop_map(Board::from_cells)
}

/// A position reached by alternating legal moves from the empty board,
/// stopping at the first terminal position
fn reachable_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0usize..9, 0..9).prop_map(|choices| {
        let mut board = Board::new();
        for choice in choices {
            if is_terminal(&board) {
                break;
            }
            let open: Vec<usize> = board.empty_cells().collect();
            let index = open[choice % open.len()];
            let mark = board.side_to_move();
            board.place(index, mark);
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn has_won_symmetric_under_relabel(board in arbitrary_board()) {
        let swapped = board.relabeled();
        prop_assert_eq!(has_won(&board, Mark::X), has_won(&swapped, Mark::O));
        prop_assert_eq!(has_won(&board, Mark::O), has_won(&swapped, Mark::X));
    }

    #[test]
    fn status_consistent_with_predicates(board in arbitrary_board()) {
        let status = game_status(&board);
        prop_assert_eq!(status.is_over(), is_terminal(&board));
        if status == GameStatus::Draw {
            prop_assert!(is_full(&board));
            prop_assert!(!has_won(&board, Mark::X) && !has_won(&board, Mark::O));
        }
    }

    #[test]
    fn reachable_boards_keep_turn_order(board in reachable_board()) {
        prop_assert!(board.validate().is_ok());
    }

    #[test]
    fn search_is_idempotent(board in reachable_board()) {
        let mark = board.side_to_move();
        let first = best_move(&board, mark);
        let second = best_move(&board, mark);
        prop_assert_eq!(first.best_move, second.best_move);
        prop_assert_eq!(first.score, second.score);
    }

    #[test]
    fn search_leaves_board_untouched(board in reachable_board()) {
        let mark = board.side_to_move();
        let mut work = board;
        let _ = minimax(&mut work, mark);
        prop_assert_eq!(work, board);
    }

    #[test]
    fn engine_agrees_with_search_value(board in reachable_board()) {
        let mark = board.side_to_move();
        let mut engine = Engine::new();
        let result = engine.get_move_with_stats(&board, mark);
        prop_assert_eq!(result.score, best_move(&board, mark).score);
    }

    #[test]
    fn chosen_move_is_open_and_best(board in reachable_board()) {
        let mark = board.side_to_move();
        let result = best_move(&board, mark);

        match result.best_move {
            None => prop_assert!(is_terminal(&board)),
            Some(index) => {
                prop_assert!(board.is_empty(index));
                let scores = result.candidates.iter().map(|m| m.score);
                let best = if mark == Mark::O { scores.max() } else { scores.min() };
                prop_assert_eq!(Some(result.score), best);
                // No earlier candidate reaches the same score
                let first = result.candidates.iter().find(|m| m.score == result.score).map(|m| m.index);
                prop_assert_eq!(first, Some(index));
            }
        }
    }
}
