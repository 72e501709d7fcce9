use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tictacbot::search::alphabeta::{SearchParams, Searcher};
use tictacbot::selfplay::{play_from, GameResult};
use tictacbot::{evaluate, select_move, Board, Difficulty, Mark};

fn reachable_ongoing() -> Vec<Board> {
    fn walk(b: &mut Board, to_move: Mark, seen: &mut HashSet<Board>) {
        if evaluate(b).is_terminal() || !seen.insert(*b) { return; }
        for i in 0..9 {
            if !b.is_cell_empty(i) { continue; }
            b.set(i, to_move);
            walk(b, to_move.opponent(), seen);
            b.clear(i);
        }
    }
    let mut seen = HashSet::new();
    walk(&mut Board::new(), Mark::X, &mut seen);
    let mut v: Vec<Board> = seen.into_iter().collect();
    v.sort_by_key(|b| b.to_compact());
    v
}

// Engine plays `engine`; the other side tries every legal reply.
fn assert_never_loses(b: &mut Board, to_move: Mark, engine: Mark) {
    if let Some(w) = evaluate(b).winner() {
        assert_ne!(w, engine.opponent(), "engine lost on {}", b.to_compact());
        return;
    }
    if b.is_full() { return; }
    if to_move == engine {
        let mv = select_move(b, Difficulty::Optimal, engine).expect("ongoing board has a move");
        assert!(b.is_cell_empty(mv));
        b.set(mv, engine);
        assert_never_loses(b, to_move.opponent(), engine);
        b.clear(mv);
    } else {
        for i in 0..9 {
            if !b.is_cell_empty(i) { continue; }
            b.set(i, to_move);
            assert_never_loses(b, to_move.opponent(), engine);
            b.clear(i);
        }
    }
}

#[test]
fn reachable_position_count() {
    // 5478 legal positions, 958 of them finished
    assert_eq!(reachable_ongoing().len(), 4520);
}

#[test]
fn optimal_second_mover_never_loses() {
    assert_never_loses(&mut Board::new(), Mark::X, Mark::O);
}

#[test]
fn optimal_first_mover_never_loses() {
    assert_never_loses(&mut Board::new(), Mark::X, Mark::X);
}

#[test]
fn optimal_vs_optimal_from_empty_board_draws() {
    let mut rng = SmallRng::seed_from_u64(0);
    let rec = play_from(Board::new(), Difficulty::Optimal, Difficulty::Optimal, &mut rng);
    assert_eq!(rec.result, GameResult::Draw);
    assert_eq!(rec.moves.len(), 9);
}

#[test]
fn optimal_vs_optimal_realises_root_score() {
    let mut rng = SmallRng::seed_from_u64(0);
    for b in reachable_ongoing() {
        let me = b.side_to_move();
        let r = Searcher::default().search(&b, me);
        let rec = play_from(b, Difficulty::Optimal, Difficulty::Optimal, &mut rng);
        let expected = match (r.score.signum(), me) {
            (0, _) => GameResult::Draw,
            (1, Mark::X) | (-1, Mark::O) => GameResult::XWins,
            _ => GameResult::OWins,
        };
        assert_eq!(rec.result, expected, "board {} score {}", b.to_compact(), r.score);
    }
}

#[test]
fn alphabeta_matches_minimax_everywhere() {
    for b in reachable_ongoing() {
        let me = b.side_to_move();
        let plain = Searcher::default().search(&b, me);
        let ab = Searcher::with_params(SearchParams { use_alphabeta: true, threads: 1 }).search(&b, me);
        assert_eq!((ab.best_move, ab.score), (plain.best_move, plain.score), "board {}", b.to_compact());
    }
}

#[test]
fn root_parallel_matches_single_thread() {
    let positions = ["... ... ...", "X.. ... ...", "... .X. ...", "X.. .O. ...", "XX. .O. ..O", "XO. ... ..."];
    for p in positions {
        let b: Board = p.parse().unwrap();
        let me = b.side_to_move();
        let single = Searcher::default().search(&b, me);
        for use_alphabeta in [false, true] {
            let mut s = Searcher::with_params(SearchParams { use_alphabeta, threads: 4 });
            let par = s.search(&b, me);
            assert_eq!((par.best_move, par.score), (single.best_move, single.score), "board {p} alphabeta {use_alphabeta}");
        }
    }
}
