use crate::board::{Board, Line, Mark, LINES};
use serde::{Deserialize, Serialize};

// Scoring helpers, from the automated player's point of view
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Won { mark: Mark, line: Line },
    Drawn,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool { !matches!(self, Outcome::Ongoing) }

    pub fn winner(&self) -> Option<Mark> {
        match self { Outcome::Won { mark, .. } => Some(*mark), _ => None }
    }
}

/// Judges a position. Lines are scanned in `LINES` order and the first
/// complete one wins. A board with two complete lines cannot arise from legal
/// play; for such input the result is whichever comes first, nothing more.
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(m) = board.get(a) {
            if board.get(b) == Some(m) && board.get(c) == Some(m) {
                return Outcome::Won { mark: m, line };
            }
        }
    }
    if board.is_full() { Outcome::Drawn } else { Outcome::Ongoing }
}

/// Depth-adjusted terminal score for `me`: faster wins and slower losses rank higher.
/// `None` while the game is still going.
pub fn terminal_score(outcome: &Outcome, me: Mark, depth: i32) -> Option<i32> {
    match outcome {
        Outcome::Won { mark, .. } if *mark == me => Some(WIN_SCORE - depth),
        Outcome::Won { .. } => Some(depth - WIN_SCORE),
        Outcome::Drawn => Some(DRAW_SCORE),
        Outcome::Ongoing => None,
    }
}
