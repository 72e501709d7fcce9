use crate::board::Board;
use rand::Rng;

/// Probability that Medium defers to the optimal search.
pub const MEDIUM_OPTIMAL_RATE: f64 = 0.6;

/// Uniform choice among the empty cells; `None` on a full board.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = board.empty_cells().collect();
    if empty.is_empty() { return None; }
    Some(empty[rng.gen_range(0..empty.len())])
}

/// The Medium gate. Drawn separately from any later cell pick.
pub fn medium_plays_optimal<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(MEDIUM_OPTIMAL_RATE)
}
