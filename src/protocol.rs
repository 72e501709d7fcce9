use std::io::{self, BufRead, Write};
use log::trace;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use crate::board::Board;
use crate::search::alphabeta::{Searcher, SearchParams};
use crate::search::eval::{evaluate, Outcome};
use crate::search::{select_move_with_searcher, Difficulty};

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Used by a bare `go`.
    pub difficulty: Difficulty,
    pub search: SearchParams,
    /// Fixed seed for Easy/Medium; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self { Self { difficulty: Difficulty::Optimal, search: SearchParams::default(), seed: None } }
}

/// Line-oriented driver: `new`, `position <board>`, `play <i>`, `eval`,
/// `go [difficulty]`, `show`, `quit`.
pub struct TextEngine {
    board: Board,
    config: EngineConfig,
    searcher: Searcher,
    rng: SmallRng,
}

impl TextEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed { Some(s) => SmallRng::seed_from_u64(s), None => SmallRng::from_entropy() };
        Self { board: Board::new(), config, searcher: Searcher::with_params(config.search), rng }
    }

    pub fn board(&self) -> &Board { &self.board }

    fn cmd_position(&mut self, args: &str, out: &mut impl Write) -> io::Result<()> {
        match args.parse::<Board>() {
            Ok(b) => self.board = b,
            Err(e) => writeln!(out, "error {}", e)?,
        }
        Ok(())
    }

    fn cmd_play(&mut self, args: &str, out: &mut impl Write) -> io::Result<()> {
        if evaluate(&self.board).is_terminal() {
            return writeln!(out, "error game over");
        }
        let idx = match args.trim().parse::<usize>() {
            Ok(i) => i,
            Err(_) => return writeln!(out, "error bad index '{}'", args.trim()),
        };
        let mark = self.board.side_to_move();
        if let Err(e) = self.board.try_place(idx, mark) { writeln!(out, "error {}", e)?; }
        Ok(())
    }

    fn cmd_eval(&self, out: &mut impl Write) -> io::Result<()> {
        match evaluate(&self.board) {
            Outcome::Ongoing => writeln!(out, "outcome ongoing"),
            Outcome::Drawn => writeln!(out, "outcome drawn"),
            Outcome::Won { mark, line: [a, b, c] } => writeln!(out, "outcome won {} {} {} {}", mark, a, b, c),
        }
    }

    fn cmd_go(&mut self, args: &str, out: &mut impl Write) -> io::Result<()> {
        let difficulty = match args.split_whitespace().next() {
            None => self.config.difficulty,
            Some(tok) => match tok.parse::<Difficulty>() {
                Ok(d) => d,
                Err(e) => return writeln!(out, "error {}", e),
            },
        };
        if evaluate(&self.board).is_terminal() {
            return writeln!(out, "error game over");
        }
        let me = self.board.side_to_move();
        let choice = select_move_with_searcher(&mut self.searcher, &self.board, difficulty, me, &mut self.rng);
        match choice {
            Some(i) => writeln!(out, "bestmove {}", i),
            None => writeln!(out, "bestmove none"),
        }
    }

    /// Handles one command line. Returns `false` on `quit`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let line = line.trim();
        if line.is_empty() { return Ok(true); }
        trace!("cmd: {}", line);
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match cmd {
            "quit" => return Ok(false),
            "new" => self.board = Board::new(),
            "position" => self.cmd_position(rest, out)?,
            "play" => self.cmd_play(rest, out)?,
            "eval" => self.cmd_eval(out)?,
            "go" => self.cmd_go(rest, out)?,
            "show" => writeln!(out, "{}", self.board.to_compact())?,
            other => writeln!(out, "error unknown command {}", other)?,
        }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if !self.handle_line(&line, &mut out)? { break; }
        }
        Ok(())
    }
}
