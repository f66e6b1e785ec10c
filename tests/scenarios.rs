//! Named game scenarios and full games against the engine

use tictactoe::board::{Board, Mark};
use tictactoe::rules::{game_status, has_won, is_full, GameStatus};
use tictactoe::search::{best_move, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use tictactoe::{Engine, SearchType};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

#[test]
fn empty_board_o_to_move_draws() {
    let mut engine = Engine::new();
    let result = engine.get_move_with_stats(&Board::new(), Mark::O);
    assert!(result.best_move.is_some_and(|idx| idx < 9));
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn o_completes_middle_row() {
    let mut engine = Engine::new();
    let result = engine.get_move_with_stats(&board("XX./OO./..."), Mark::O);
    assert_eq!(result.best_move, Some(5));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn alternating_fill_is_lost_for_o() {
    // X to move wins on either diagonal; O to move can block only one
    let b = board("XOX/OXO/...");
    assert_eq!(best_move(&b, Mark::X).score, LOSS_SCORE);
    assert_eq!(best_move(&b, Mark::O).score, LOSS_SCORE);
}

#[test]
fn full_board_without_line_is_draw() {
    let b = board("XOX/XOO/OXX");
    assert!(is_full(&b));
    assert!(!has_won(&b, Mark::X));
    assert!(!has_won(&b, Mark::O));
    assert_eq!(game_status(&b), GameStatus::Draw);
}

#[test]
fn finished_board_returns_score_only() {
    let b = board("XO./OX./..X");
    assert!(has_won(&b, Mark::X));

    let result = best_move(&b, Mark::O);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, LOSS_SCORE);

    let mut engine = Engine::new();
    let result = engine.get_move_with_stats(&b, Mark::O);
    assert_eq!(result.search_type, SearchType::Terminal);
    assert_eq!(result.best_move, None);
}

#[test]
fn engine_self_play_draws() {
    let mut engine = Engine::new();
    let mut b = Board::new();
    while game_status(&b) == GameStatus::InProgress {
        let mark = b.side_to_move();
        let index = engine.get_move(&b, mark).unwrap();
        assert!(b.is_empty(index));
        b.place(index, mark);
    }
    assert_eq!(game_status(&b), GameStatus::Draw);
}

/// Every X strategy against the engine as O; returns the number of games
fn play_all_x_lines(b: &Board, engine: &mut Engine) -> usize {
    match game_status(b) {
        GameStatus::Win(mark) => {
            assert_eq!(mark, Mark::O, "X won against the engine:\n{b}");
            return 1;
        }
        GameStatus::Draw => return 1,
        GameStatus::InProgress => {}
    }

    let open: Vec<usize> = b.empty_cells().collect();
    let mut games = 0;
    for x_move in open {
        let mut after_x = *b;
        after_x.place(x_move, Mark::X);
        if game_status(&after_x).is_over() {
            games += play_all_x_lines(&after_x, engine);
            continue;
        }
        let o_move = engine.get_move(&after_x, Mark::O).unwrap();
        after_x.place(o_move, Mark::O);
        games += play_all_x_lines(&after_x, engine);
    }
    games
}

#[test]
fn engine_never_loses_to_any_x_strategy() {
    let mut engine = Engine::new();
    let games = play_all_x_lines(&Board::new(), &mut engine);
    assert!(games > 0);
}
