use anyhow::Result;
use clap::Parser;
use std::io;
use tictacbot::protocol::{EngineConfig, TextEngine};
use tictacbot::search::alphabeta::SearchParams;
use tictacbot::Difficulty;

#[derive(Parser, Debug)]
#[command(author, version, about = "Tic-tac-toe engine speaking a line protocol on stdin/stdout", long_about = None)]
struct Args {
    /// Difficulty used by a bare `go`
    #[arg(long, value_enum, default_value_t = Difficulty::Optimal)]
    difficulty: Difficulty,

    /// Root-split threads for the optimal search
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Prune the optimal search with alpha-beta
    #[arg(long)]
    alphabeta: bool,

    /// Seed for Easy/Medium randomness
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = EngineConfig {
        difficulty: args.difficulty,
        search: SearchParams { use_alphabeta: args.alphabeta, threads: args.threads },
        seed: args.seed,
    };
    let mut engine = TextEngine::new(config);
    let stdin = io::stdin();
    engine.run_loop(stdin.lock(), io::stdout())?;
    Ok(())
}
