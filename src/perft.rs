//! Perft (performance test) for move generation correctness.

use std::time::Instant;

use log::debug;

use crate::board::{Move, Position};
use crate::search::{PerftInfo, Reporter};

/// Leaf count below one root move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerftMove {
    pub mv: Move,
    pub leaves: u64,
}

impl Position {
    /// Count the leaves of the full game tree `depth` plies deep.
    ///
    /// No terminal checks are made: positions where the game is already over
    /// are expanded like any other, so only the generator is exercised.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|m| m.position.flip().perft(depth - 1))
            .sum()
    }

    /// Leaf counts for each root move, in generation order.
    #[must_use]
    pub fn split_perft(&self, depth: usize) -> Vec<PerftMove> {
        if depth == 0 {
            return Vec::new();
        }
        self.generate_moves()
            .iter()
            .map(|m| PerftMove {
                mv: m.mv,
                leaves: m.position.flip().perft(depth - 1),
            })
            .collect()
    }
}

/// Run perft at depths 1 to `max_depth`, reporting each.
pub fn run_perft(position: &Position, max_depth: usize, reporter: &dyn Reporter) -> Vec<u64> {
    let mut counts = Vec::with_capacity(max_depth);
    for depth in 1..=max_depth {
        let start = Instant::now();
        let leaves = position.perft(depth);
        let elapsed = start.elapsed();
        debug!("perft {depth}: {leaves} leaves in {elapsed:?}");
        reporter.perft(&PerftInfo {
            depth,
            leaves,
            elapsed,
        });
        counts.push(leaves);
    }
    counts
}

/// Report per-move counts at `depth` in absolute coordinates and return
/// their total.
pub fn run_split_perft(
    position: &Position,
    white_to_move: bool,
    depth: usize,
    reporter: &dyn Reporter,
) -> u64 {
    let split = position.split_perft(depth);
    for entry in &split {
        reporter.split_move(&entry.mv.to_absolute(white_to_move).to_string(), entry.leaves);
    }
    split.iter().map(|e| e.leaves).sum()
}
