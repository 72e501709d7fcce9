pub mod alphabeta;
pub mod eval;
pub mod noise;

use crate::board::{Board, Mark};
use alphabeta::Searcher;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Optimal 60% of the time, random otherwise.
    Medium,
    /// Full minimax; never loses.
    #[value(alias = "hard", alias = "impossible")]
    Optimal,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self { Difficulty::Easy => "easy", Difficulty::Medium => "medium", Difficulty::Optimal => "optimal" };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "optimal" | "hard" | "impossible" => Ok(Difficulty::Optimal),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// Picks the next cell for the automated player `me`. `None` when no cell is empty.
///
/// Call only on positions that `evaluate` reports as ongoing; on a terminal
/// board with empty cells the search still returns one of them.
pub fn select_move(board: &Board, difficulty: Difficulty, me: Mark) -> Option<usize> {
    select_move_with_rng(board, difficulty, me, &mut rand::thread_rng())
}

/// As [`select_move`], drawing randomness from `rng`. Medium's gate and its
/// random cell are separate draws.
pub fn select_move_with_rng<R: Rng + ?Sized>(board: &Board, difficulty: Difficulty, me: Mark, rng: &mut R) -> Option<usize> {
    select_move_with_searcher(&mut Searcher::default(), board, difficulty, me, rng)
}

/// As [`select_move_with_rng`], running the optimal search (Optimal, and
/// Medium's optimal share) on `searcher` so its params apply.
pub fn select_move_with_searcher<R: Rng + ?Sized>(searcher: &mut Searcher, board: &Board, difficulty: Difficulty, me: Mark, rng: &mut R) -> Option<usize> {
    if board.is_full() { return None; }
    let choice = match difficulty {
        Difficulty::Easy => noise::random_empty_cell(board, rng),
        Difficulty::Medium => {
            if noise::medium_plays_optimal(rng) {
                searcher.search(board, me).best_move
            } else {
                noise::random_empty_cell(board, rng)
            }
        }
        Difficulty::Optimal => searcher.search(board, me).best_move,
    };
    debug!("{} move for {} on {}: {:?}", difficulty, me, board.to_compact(), choice);
    choice
}
