use crate::board::{Board, Mark};
use crate::search::eval::{evaluate, terminal_score};
use log::{debug, trace, warn};
use rayon::prelude::*;

// Bigger than any reachable score
const INF: i32 = 1_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Prune with alpha-beta. Chooses the same move and score as plain minimax.
    pub use_alphabeta: bool,
    /// Root-split across a rayon pool when > 1.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self { Self { use_alphabeta: false, threads: 1 } }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    /// Root score for the searching side; 0 when there was nothing to search.
    pub score: i32,
    pub nodes: u64,
}

/// Exhaustive minimax over the remaining game tree.
///
/// Root moves are tried in increasing cell order and a move only replaces the
/// current best when its score is strictly greater, so ties go to the lowest
/// index. The caller's board is never touched: search places and undoes marks
/// on a private copy.
pub struct Searcher {
    pub(crate) nodes: u64,
    use_alphabeta: bool,
    threads: usize,
}

impl Default for Searcher {
    fn default() -> Self { Self { nodes: 0, use_alphabeta: false, threads: 1 } }
}

impl Searcher {
    pub fn with_params(params: SearchParams) -> Self {
        Self { nodes: 0, use_alphabeta: params.use_alphabeta, threads: params.threads.max(1) }
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search_with_params(&mut self, board: &Board, me: Mark, params: SearchParams) -> SearchResult {
        self.use_alphabeta = params.use_alphabeta;
        self.threads = params.threads.max(1);
        self.search(board, me)
    }

    /// Best cell for `me` to play, assuming the opponent answers optimally.
    pub fn search(&mut self, board: &Board, me: Mark) -> SearchResult {
        self.nodes = 0;
        if self.threads > 1 {
            return self.search_parallel(board, me);
        }

        let mut scratch = *board;
        let mut best: Option<(usize, i32)> = None;
        for idx in board.empty_cells() {
            scratch.set(idx, me);
            let score = if self.use_alphabeta {
                let alpha = best.map_or(-INF, |(_, s)| s);
                self.alphabeta(&mut scratch, 0, alpha, INF, false, me)
            } else {
                self.minimax(&mut scratch, 0, false, me)
            };
            scratch.clear(idx);
            trace!("root {} score {}", idx, score);
            if best.map_or(true, |(_, bs)| score > bs) { best = Some((idx, score)); }
        }
        let res = SearchResult {
            best_move: best.map(|(m, _)| m),
            score: best.map_or(0, |(_, s)| s),
            nodes: self.nodes,
        };
        debug!("search {} for {}: best {:?} score {} nodes {}", board.to_compact(), me, res.best_move, res.score, res.nodes);
        res
    }

    /// Exact minimax score of every empty cell, in cell order.
    pub fn score_moves(&mut self, board: &Board, me: Mark) -> Vec<(usize, i32)> {
        let mut scratch = *board;
        let mut out = Vec::with_capacity(9);
        for idx in board.empty_cells() {
            scratch.set(idx, me);
            let score = self.minimax(&mut scratch, 0, false, me);
            scratch.clear(idx);
            out.push((idx, score));
        }
        out
    }

    fn search_parallel(&mut self, board: &Board, me: Mark) -> SearchResult {
        let moves: Vec<usize> = board.empty_cells().collect();
        let use_alphabeta = self.use_alphabeta;

        // Each root move is scored on its own board copy with a full window
        let run = || -> Vec<(usize, i32, u64)> {
            moves.par_iter().map(|&idx| {
                let mut child = *board;
                child.set(idx, me);
                let mut w = Searcher { nodes: 0, use_alphabeta, threads: 1 };
                let score = if use_alphabeta {
                    w.alphabeta(&mut child, 0, -INF, INF, false, me)
                } else {
                    w.minimax(&mut child, 0, false, me)
                };
                (idx, score, w.nodes)
            }).collect()
        };
        let results = match rayon::ThreadPoolBuilder::new().num_threads(self.threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!("thread pool unavailable ({}), searching on the global pool", e);
                run()
            }
        };

        // Reduce in cell order so ties still go to the lowest index
        let mut best: Option<(usize, i32)> = None;
        let mut total_nodes = 0u64;
        for (m, s, n) in results {
            total_nodes += n;
            if best.map_or(true, |(_, bs)| s > bs) { best = Some((m, s)); }
        }
        self.nodes = total_nodes;
        let res = SearchResult { best_move: best.map(|(m, _)| m), score: best.map_or(0, |(_, s)| s), nodes: self.nodes };
        debug!("parallel search {} for {} ({} threads): best {:?} score {} nodes {}",
            board.to_compact(), me, self.threads, res.best_move, res.score, res.nodes);
        res
    }

    // `depth` counts plies below the root move; the position right after it is 0.
    fn minimax(&mut self, board: &mut Board, depth: i32, maximizing: bool, me: Mark) -> i32 {
        self.nodes += 1;
        if let Some(s) = terminal_score(&evaluate(board), me, depth) { return s; }

        let mark = if maximizing { me } else { me.opponent() };
        let mut best = if maximizing { -INF } else { INF };
        for idx in 0..9 {
            if !board.is_cell_empty(idx) { continue; }
            board.set(idx, mark);
            let score = self.minimax(board, depth + 1, !maximizing, me);
            board.clear(idx);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    // Fail-soft: a result <= alpha is only an upper bound, one >= beta only a lower bound.
    fn alphabeta(&mut self, board: &mut Board, depth: i32, mut alpha: i32, mut beta: i32, maximizing: bool, me: Mark) -> i32 {
        self.nodes += 1;
        if let Some(s) = terminal_score(&evaluate(board), me, depth) { return s; }

        let mark = if maximizing { me } else { me.opponent() };
        let mut best = if maximizing { -INF } else { INF };
        for idx in 0..9 {
            if !board.is_cell_empty(idx) { continue; }
            board.set(idx, mark);
            let score = self.alphabeta(board, depth + 1, alpha, beta, !maximizing, me);
            board.clear(idx);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta { break; }
        }
        best
    }
}
