//! Search module for the tic-tac-toe AI
//!
//! Contains the exhaustive minimax search. The game tree is small enough
//! that neither pruning nor a transposition table is needed.

pub mod minimax;

pub use minimax::{
    best_move, minimax, terminal_score, Evaluation, Move, SearchResult, Searcher, DRAW_SCORE,
    LOSS_SCORE, WIN_SCORE,
};
