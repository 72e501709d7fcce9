use clap::Parser;
use rayon::prelude::*;
use std::time::Instant;
use tictacbot::perft::{count_games, perft};
use tictacbot::{evaluate, Board};

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Game-tree counter for tictacbot")]
struct Args {
    /// Plies to count
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board in text form, or "startpos"
    #[arg(value_name = "BOARD", default_value = "startpos")]
    board: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Also count complete games
    #[arg(long, default_value_t = false)]
    games: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board: Board = if args.board == "startpos" { Board::new() } else { args.board.parse()? };
    let to_move = board.side_to_move();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| {
        if args.threads <= 1 || args.depth == 0 || evaluate(&board).is_terminal() {
            perft(&board, to_move, args.depth)
        } else {
            let roots: Vec<usize> = board.empty_cells().collect();
            roots.par_iter().map(|&idx| {
                let mut child = board;
                child.set(idx, to_move);
                perft(&child, to_move.opponent(), args.depth - 1)
            }).sum()
        }
    });
    let dt = t0.elapsed().as_secs_f64();
    println!("nodes: {} elapsed: {:.3}s", nodes, dt);
    if args.games {
        println!("games: {}", count_games(&board, to_move));
    }
    Ok(())
}
