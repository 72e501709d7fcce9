// Tic-tac-toe outcome evaluator and minimax opponent
pub mod board;
pub mod error;
pub mod perft;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{Board, Line, Mark, LINES};
pub use error::{Error, Result};
pub use search::eval::{evaluate, Outcome};
pub use search::{select_move, select_move_with_rng, select_move_with_searcher, Difficulty};
