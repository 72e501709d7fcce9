use thiserror::Error;

/// Errors from the outer surfaces: board parsing, record replay and record I/O.
/// The evaluator and the move selector themselves never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("board needs 9 cells, got {got}")]
    BoardLength { got: usize },

    #[error("invalid board character '{ch}' at cell {position}")]
    BoardChar { ch: char, position: usize },

    #[error("illegal move: cell {index} is occupied or out of range")]
    IllegalMove { index: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
