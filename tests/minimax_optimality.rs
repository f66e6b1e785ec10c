//! Cross-check the search against an independent solver over every
//! reachable position.

use std::collections::HashMap;

use tictactoe::board::{Board, Mark};
use tictactoe::rules::is_terminal;
use tictactoe::search::{best_move, minimax, LOSS_SCORE, WIN_SCORE};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Cells as +1 (X), -1 (O), 0 (empty)
type Cells = [i8; 9];

fn to_cells(board: &Board) -> Cells {
    let mut cells = [0; 9];
    for (slot, mark) in cells.iter_mut().zip(board.cells()) {
        *slot = match mark {
            Mark::X => 1,
            Mark::O => -1,
            Mark::Empty => 0,
        };
    }
    cells
}

fn line_owner(cells: &Cells) -> i8 {
    for [a, b, c] in LINES {
        let sum = cells[a] + cells[b] + cells[c];
        if sum == 3 {
            return 1;
        }
        if sum == -3 {
            return -1;
        }
    }
    0
}

/// Value from O's point of view with `to_move` (+1 X, -1 O) to play.
fn solve(cells: &mut Cells, to_move: i8, memo: &mut HashMap<(Cells, i8), i32>) -> i32 {
    if let Some(&value) = memo.get(&(*cells, to_move)) {
        return value;
    }
    let value = match line_owner(cells) {
        1 => LOSS_SCORE,
        -1 => WIN_SCORE,
        _ if cells.iter().all(|&c| c != 0) => 0,
        _ => {
            let mut values = Vec::new();
            for idx in 0..9 {
                if cells[idx] == 0 {
                    cells[idx] = to_move;
                    values.push(solve(cells, -to_move, memo));
                    cells[idx] = 0;
                }
            }
            if to_move == -1 {
                values.into_iter().max().unwrap()
            } else {
                values.into_iter().min().unwrap()
            }
        }
    };
    memo.insert((*cells, to_move), value);
    value
}

/// Every non-terminal position reachable from the empty board with X first
fn reachable_positions() -> Vec<Board> {
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![Board::new()];
    let mut positions = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) || is_terminal(&board) {
            continue;
        }
        positions.push(board);
        let mark = board.side_to_move();
        for idx in board.empty_cells() {
            let mut child = board;
            child.place(idx, mark);
            stack.push(child);
        }
    }
    positions
}

#[test]
fn reachable_position_count() {
    // 5478 legal positions, 958 of them terminal
    assert_eq!(reachable_positions().len(), 5478 - 958);
}

#[test]
fn search_score_matches_game_value() {
    let mut memo = HashMap::new();
    for board in reachable_positions() {
        let mark = board.side_to_move();
        let to_move = if mark == Mark::X { 1 } else { -1 };
        let expected = solve(&mut to_cells(&board), to_move, &mut memo);

        let result = best_move(&board, mark);
        assert_eq!(result.score, expected, "wrong value for {mark} on\n{board}");

        // The chosen move must keep the value and be the lowest such index
        let chosen = result.best_move.expect("non-terminal board has a move");
        let mut child = to_cells(&board);
        child[chosen] = to_move;
        assert_eq!(solve(&mut child, -to_move, &mut memo), expected);

        let first_optimal = board
            .empty_cells()
            .find(|&idx| {
                let mut c = to_cells(&board);
                c[idx] = to_move;
                solve(&mut c, -to_move, &mut memo) == expected
            })
            .unwrap();
        assert_eq!(chosen, first_optimal, "tie-break on\n{board}");
    }
}

#[test]
fn in_place_search_leaves_board_intact() {
    for board in reachable_positions().into_iter().step_by(37) {
        let mut work = board;
        let eval = minimax(&mut work, board.side_to_move());
        assert_eq!(work, board);
        assert!(eval.best_move.is_some());
    }
}

#[test]
fn o_holds_the_draw_after_any_opening() {
    // O may not lose from any position after X's opening move
    let mut memo = HashMap::new();
    for idx in 0..9 {
        let mut board = Board::new();
        board.place(idx, Mark::X);
        assert!(best_move(&board, Mark::O).score >= 0);
        assert!(solve(&mut to_cells(&board), -1, &mut memo) >= 0);
    }
}
