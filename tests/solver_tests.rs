//! Solver tests through the public API.

use peasant_chess::board::Setup;
use peasant_chess::perft::run_perft;
use peasant_chess::search::{
    IterationInfo, PerftInfo, Reporter, SearchConfig, SilentReporter, Solver, Value, Verdict,
};
use std::cell::RefCell;

/// Records everything the solver reports.
#[derive(Default)]
struct RecordingReporter {
    iterations: RefCell<Vec<(usize, Value, Value, String)>>,
    perfts: RefCell<Vec<(usize, u64)>>,
}

impl Reporter for RecordingReporter {
    fn iteration(&self, info: &IterationInfo) {
        self.iterations.borrow_mut().push((
            info.depth,
            info.lower_bound,
            info.upper_bound,
            info.pv.clone(),
        ));
    }

    fn perft(&self, info: &PerftInfo) {
        self.perfts.borrow_mut().push((info.depth, info.leaves));
    }

    fn split_move(&self, _mv: &str, _leaves: u64) {}
}

fn small_solver() -> Solver {
    Solver::new(SearchConfig::with_hash_mb(1, 4))
}

#[test]
fn white_wins_the_pawn_race() {
    let setup: Setup = "8/p7/8/8/8/8/4P3/8 w -".parse().unwrap();
    let solution = small_solver().solve(&setup, &SilentReporter).unwrap();
    assert_eq!(solution.verdict(), Some(Verdict::WhiteWins));
    assert!(solution.depth <= 9);
}

#[test]
fn black_to_move_still_loses_the_race() {
    // Mirror image of the race with colours swapped.
    let setup: Setup = "8/4p3/8/8/8/8/P7/8 b -".parse().unwrap();
    let solution = small_solver().solve(&setup, &SilentReporter).unwrap();
    assert_eq!(solution.verdict(), Some(Verdict::BlackWins));
}

#[test]
fn blocked_pawns_draw() {
    let setup: Setup = "8/8/8/4p3/4P3/8/8/8 b -".parse().unwrap();
    let solution = small_solver().solve(&setup, &SilentReporter).unwrap();
    assert_eq!(solution.verdict(), Some(Verdict::Draw));
    assert_eq!(solution.depth, 1);
    assert!(solution.pv.is_empty());
}

#[test]
fn reporter_sees_every_iteration() {
    let setup: Setup = "8/8/8/3pP3/8/8/8/8 w -".parse().unwrap();
    let reporter = RecordingReporter::default();
    let solution = Solver::new(SearchConfig::without_table())
        .solve(&setup, &reporter)
        .unwrap();

    let iterations = reporter.iterations.borrow();
    assert_eq!(iterations.len(), 5);
    for (i, (depth, lower, upper, _)) in iterations.iter().enumerate() {
        assert_eq!(*depth, i + 1);
        if *depth < 5 {
            assert_eq!((*lower, *upper), (Value::Loss, Value::Win));
        }
    }
    let (_, lower, upper, pv) = iterations.last().unwrap();
    assert_eq!((*lower, *upper), (Value::Win, Value::Win));
    assert_eq!(pv, &solution.pv_string());
    assert!(pv.starts_with("e5e6"));
}

#[test]
fn perft_driver_reports_each_depth() {
    let reporter = RecordingReporter::default();
    let counts = run_perft(&Setup::START.position, 3, &reporter);
    assert_eq!(counts, vec![16, 256, 3846]);
    assert_eq!(
        *reporter.perfts.borrow(),
        vec![(1, 16), (2, 256), (3, 3846)]
    );
}

#[test]
fn invalid_fen_is_reported() {
    assert!("8/8/8/8 w -".parse::<Setup>().is_err());
    assert!("8/pppppppp/8/8/8/8/PPPPPPPP/8 x -".parse::<Setup>().is_err());
    assert!("8/8/8/3pP3/8/8/8/8 w e6".parse::<Setup>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn search_results_serialize() {
    use peasant_chess::search::SearchResult;
    use peasant_chess::Position;

    let result = SearchResult::new(Value::Draw, Value::Win, 42);
    let json = serde_json::to_string(&result).unwrap();
    let back: SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);

    let json = serde_json::to_string(&Position::START).unwrap();
    let back: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Position::START);
}
