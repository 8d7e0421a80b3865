use std::time::Duration;

use super::Value;

pub struct IterationInfo {
    pub depth: usize,
    pub lower_bound: Value,
    pub upper_bound: Value,
    pub leaves: u64,
    pub elapsed: Duration,
    pub pv: String,
}

pub struct PerftInfo {
    pub depth: usize,
    pub leaves: u64,
    pub elapsed: Duration,
}

/// Leaves per second in millions; zero when no time was measured.
#[must_use]
pub fn megaleaves_per_sec(leaves: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        leaves as f64 / secs / 1_000_000.0
    } else {
        0.0
    }
}

pub trait Reporter {
    fn iteration(&self, info: &IterationInfo);
    fn perft(&self, info: &PerftInfo);
    fn split_move(&self, mv: &str, leaves: u64);
}

pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn iteration(&self, info: &IterationInfo) {
        println!(
            "depth {}; score ({}, {}); leaves {}; sec {:.3}; megaleaves/sec {:.3}; pv {}",
            info.depth,
            info.lower_bound,
            info.upper_bound,
            info.leaves,
            info.elapsed.as_secs_f64(),
            megaleaves_per_sec(info.leaves, info.elapsed),
            info.pv
        );
    }

    fn perft(&self, info: &PerftInfo) {
        println!(
            "depth {}; leaves {}; sec {:.3}; megaleaves/sec {:.3}",
            info.depth,
            info.leaves,
            info.elapsed.as_secs_f64(),
            megaleaves_per_sec(info.leaves, info.elapsed)
        );
    }

    fn split_move(&self, mv: &str, leaves: u64) {
        println!("{mv}: {leaves}");
    }
}

/// Discards all progress output.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn iteration(&self, _info: &IterationInfo) {}

    fn perft(&self, _info: &PerftInfo) {}

    fn split_move(&self, _mv: &str, _leaves: u64) {}
}
