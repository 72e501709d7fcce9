use pretty_assertions::assert_eq;
use tictacbot::selfplay::{generate_games, read_records, replay, write_records, GameRecord, GameResult, MatchParams, Tally};
use tictacbot::{evaluate, Board, Difficulty, Error, Mark, Outcome};

#[test]
fn selfplay_generates_games_deterministically() {
    let params = MatchParams { games: 8, x: Difficulty::Easy, o: Difficulty::Medium, seed: 42, first_game: 0, threads: 1 };
    let g1 = generate_games(&params);
    let g2 = generate_games(&params);
    assert_eq!(g1.len(), 8);
    assert_eq!(g1, g2);
}

#[test]
fn selfplay_output_does_not_depend_on_threads() {
    let p1 = MatchParams { games: 16, x: Difficulty::Easy, o: Difficulty::Easy, seed: 7, first_game: 0, threads: 1 };
    let p4 = MatchParams { threads: 4, ..p1.clone() };
    assert_eq!(generate_games(&p1), generate_games(&p4));
}

#[test]
fn different_seeds_change_random_games() {
    let mut p = MatchParams { games: 4, x: Difficulty::Easy, o: Difficulty::Easy, seed: 1, first_game: 0, threads: 1 };
    let g1 = generate_games(&p);
    p.seed = 2;
    let g2 = generate_games(&p);
    assert_ne!(g1, g2, "seed did not alter move sampling");
}

#[test]
fn optimal_vs_optimal_always_draws() {
    let params = MatchParams { games: 4, ..MatchParams::default() };
    let games = generate_games(&params);
    assert_eq!(Tally::from_records(&games), Tally { x_wins: 0, o_wins: 0, draws: 4 });
}

#[test]
fn optimal_never_loses_to_weaker_play() {
    for weak in [Difficulty::Easy, Difficulty::Medium] {
        let as_o = generate_games(&MatchParams { games: 30, x: weak, o: Difficulty::Optimal, seed: 99, first_game: 0, threads: 2 });
        assert_eq!(Tally::from_records(&as_o).x_wins, 0, "optimal O lost to {weak}");
        let as_x = generate_games(&MatchParams { games: 10, x: Difficulty::Optimal, o: weak, seed: 99, first_game: 0, threads: 2 });
        assert_eq!(Tally::from_records(&as_x).o_wins, 0, "optimal X lost to {weak}");
    }
}

#[test]
fn replay_reaches_recorded_result() {
    let games = generate_games(&MatchParams { games: 10, x: Difficulty::Easy, o: Difficulty::Easy, seed: 5, first_game: 0, threads: 1 });
    for g in &games {
        let end = replay(g).unwrap();
        let expected = match evaluate(&end) {
            Outcome::Won { mark: Mark::X, .. } => GameResult::XWins,
            Outcome::Won { .. } => GameResult::OWins,
            Outcome::Drawn => GameResult::Draw,
            Outcome::Ongoing => panic!("replayed game unfinished: {}", end.to_compact()),
        };
        assert_eq!(g.result, expected);
    }
}

#[test]
fn replay_rejects_occupied_cell() {
    let rec = GameRecord { start: Board::new(), x: Difficulty::Easy, o: Difficulty::Easy, moves: vec![4, 4], result: GameResult::Draw };
    assert!(matches!(replay(&rec), Err(Error::IllegalMove { index: 4 })));
}

#[test]
fn write_and_read_records() {
    let games = generate_games(&MatchParams { games: 5, x: Difficulty::Medium, o: Difficulty::Easy, seed: 11, first_game: 0, threads: 1 });
    let path = std::env::temp_dir().join(format!("tictacbot_selfplay_{}.jsonl", std::process::id()));
    write_records(&games, &path).unwrap();
    let back = read_records(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back, games);
}

#[test]
fn read_records_reports_bad_json() {
    let path = std::env::temp_dir().join(format!("tictacbot_bad_{}.jsonl", std::process::id()));
    std::fs::write(&path, "{not json}\n").unwrap();
    let res = read_records(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(res, Err(Error::Json(_))));
}

#[test]
fn batches_with_offsets_match_one_run() {
    let whole = MatchParams { games: 100, x: Difficulty::Easy, o: Difficulty::Easy, seed: 0, first_game: 0, threads: 1 };
    let mut batched = Vec::new();
    for first_game in [0u64, 50] {
        batched.extend(generate_games(&MatchParams { games: 50, first_game, ..whole.clone() }));
    }
    assert_eq!(batched, generate_games(&whole));
}
