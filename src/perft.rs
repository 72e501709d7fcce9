// Game-tree counting using place/undo on a scratch copy
use crate::board::{Board, Mark};
use crate::search::eval::evaluate;

/// Number of move sequences exactly `depth` plies long. Play stops at terminal
/// positions, so a finished game contributes nothing beyond its last ply.
pub fn perft(board: &Board, to_move: Mark, depth: u32) -> u64 {
    let mut b = *board;
    perft_inner(&mut b, to_move, depth)
}

fn perft_inner(board: &mut Board, to_move: Mark, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if evaluate(board).is_terminal() { return 0; }
    let mut nodes = 0u64;
    for idx in 0..9 {
        if !board.is_cell_empty(idx) { continue; }
        board.set(idx, to_move);
        nodes += perft_inner(board, to_move.opponent(), depth - 1);
        board.clear(idx);
    }
    nodes
}

/// Number of distinct complete games (paths ending in a win or a draw).
pub fn count_games(board: &Board, to_move: Mark) -> u64 {
    let mut b = *board;
    games_inner(&mut b, to_move)
}

fn games_inner(board: &mut Board, to_move: Mark) -> u64 {
    if evaluate(board).is_terminal() { return 1; }
    let mut games = 0u64;
    for idx in 0..9 {
        if !board.is_cell_empty(idx) { continue; }
        board.set(idx, to_move);
        games += games_inner(board, to_move.opponent());
        board.clear(idx);
    }
    games
}
