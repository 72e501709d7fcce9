use crate::board::{Board, Mark};
use crate::error::Result;
use crate::search::eval::{evaluate, Outcome};
use crate::search::{select_move_with_rng, Difficulty};
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct MatchParams {
    pub games: usize,
    /// Difficulty of the side playing X (moves first).
    pub x: Difficulty,
    pub o: Difficulty,
    pub seed: u64,
    /// Index of the first game, for splitting one run into batches.
    pub first_game: u64,
    pub threads: usize,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self { games: 100, x: Difficulty::Optimal, o: Difficulty::Optimal, seed: 42, first_game: 0, threads: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    XWins,
    OWins,
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start: Board,
    pub x: Difficulty,
    pub o: Difficulty,
    pub moves: Vec<usize>,
    pub result: GameResult,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut t = Tally::default();
        for r in records {
            match r.result {
                GameResult::XWins => t.x_wins += 1,
                GameResult::OWins => t.o_wins += 1,
                GameResult::Draw => t.draws += 1,
            }
        }
        t
    }

    pub fn total(&self) -> usize { self.x_wins + self.o_wins + self.draws }
}

/// Plays from `start` until `evaluate` reports a result. The side to move is
/// inferred from the mark counts (X first).
pub fn play_from<R: Rng + ?Sized>(start: Board, x: Difficulty, o: Difficulty, rng: &mut R) -> GameRecord {
    let mut board = start;
    let mut to_move = start.side_to_move();
    let mut moves = Vec::with_capacity(9);
    let outcome = loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() { break outcome; }
        let difficulty = if to_move == Mark::X { x } else { o };
        match select_move_with_rng(&board, difficulty, to_move, rng) {
            Some(idx) => {
                board.set(idx, to_move);
                moves.push(idx);
            }
            None => {
                warn!("no move for {} on unfinished board {}", to_move, board.to_compact());
                break outcome;
            }
        }
        to_move = to_move.opponent();
    };
    let result = match outcome {
        Outcome::Won { mark: Mark::X, .. } => GameResult::XWins,
        Outcome::Won { mark: Mark::O, .. } => GameResult::OWins,
        Outcome::Drawn | Outcome::Ongoing => GameResult::Draw,
    };
    GameRecord { start, x, o, moves, result }
}

fn play_seeded(params: &MatchParams, gi: usize) -> GameRecord {
    let gi = params.first_game + gi as u64;
    let mut rng = SmallRng::seed_from_u64(params.seed ^ gi);
    let rec = play_from(Board::new(), params.x, params.o, &mut rng);
    debug!("game {}: {:?} after {:?}", gi, rec.result, rec.moves);
    rec
}

/// Game `first_game + i` is seeded with `seed ^ (first_game + i)`, so output
/// depends neither on `threads` nor on how a run is split into batches.
pub fn generate_games(params: &MatchParams) -> Vec<GameRecord> {
    let games: Vec<GameRecord> = if params.threads > 1 {
        let run = || -> Vec<GameRecord> { (0..params.games).into_par_iter().map(|gi| play_seeded(params, gi)).collect() };
        match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!("thread pool unavailable ({}), using the global pool", e);
                run()
            }
        }
    } else {
        (0..params.games).map(|gi| play_seeded(params, gi)).collect()
    };
    let t = Tally::from_records(&games);
    info!("{} ({}) vs {} ({}): {} games, X {} / O {} / draws {}",
        Mark::X, params.x, Mark::O, params.o, t.total(), t.x_wins, t.o_wins, t.draws);
    games
}

/// Re-applies a record's moves, alternating marks from the start position.
pub fn replay(record: &GameRecord) -> Result<Board> {
    let mut board = record.start;
    let mut to_move = board.side_to_move();
    for &idx in &record.moves {
        board.try_place(idx, to_move)?;
        to_move = to_move.opponent();
    }
    Ok(board)
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(records: &[GameRecord], path: P) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for r in records {
        serde_json::to_writer(&mut w, r)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let f = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in f.lines() {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() { continue; }
        out.push(serde_json::from_str(raw)?);
    }
    Ok(out)
}
