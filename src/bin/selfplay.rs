use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tictacbot::selfplay::{generate_games, write_records, GameRecord, MatchParams, Tally};
use tictacbot::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "tictacbot-selfplay", about = "Play batches of engine-vs-engine games and write JSONL records")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Difficulty playing X (moves first)
    #[arg(long, value_enum, default_value_t = Difficulty::Optimal)]
    x: Difficulty,
    /// Difficulty playing O
    #[arg(long, value_enum, default_value_t = Difficulty::Optimal)]
    o: Difficulty,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Games per batch between progress updates
    #[arg(long, default_value_t = 50)]
    batch: usize,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let batch = a.batch.max(1);
    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {msg}")?);

    let mut records: Vec<GameRecord> = Vec::with_capacity(a.games);
    let mut done = 0usize;
    while done < a.games {
        let n = batch.min(a.games - done);
        let params = MatchParams { games: n, x: a.x, o: a.o, seed: a.seed, first_game: done as u64, threads: a.threads };
        records.extend(generate_games(&params));
        done += n;
        pb.set_position(done as u64);
    }
    pb.finish_and_clear();

    let tally = Tally::from_records(&records);
    println!("{}", serde_json::to_string(&serde_json::json!({
        "x": a.x, "o": a.o, "games": tally.total(),
        "x_wins": tally.x_wins, "o_wins": tally.o_wins, "draws": tally.draws,
    }))?);
    if let Some(path) = a.out {
        write_records(&records, &path)?;
        eprintln!("Wrote {} records to {}", records.len(), path.display());
    }
    Ok(())
}
