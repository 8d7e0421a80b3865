//! Iterative deepening driver.

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use super::{IterationInfo, Reporter, SearchError, SearchResult, Solver, Value};
use crate::board::{format_variation, Move, Setup};

/// Outcome of the game in absolute terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    WhiteWins,
    BlackWins,
    Draw,
}

impl Verdict {
    /// Translate a value for the side to move.
    #[must_use]
    pub fn from_value(value: Value, white_to_move: bool) -> Self {
        let white_value = if white_to_move { value } else { -value };
        match white_value {
            Value::Win => Verdict::WhiteWins,
            Value::Loss => Verdict::BlackWins,
            Value::Draw => Verdict::Draw,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::WhiteWins => write!(f, "White wins."),
            Verdict::BlackWins => write!(f, "Black wins."),
            Verdict::Draw => write!(f, "The game is a draw."),
        }
    }
}

/// Result of the last completed iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub result: SearchResult,
    pub depth: usize,
    /// Best line, each move in its mover's frame
    pub pv: Vec<Move>,
    pub white_to_move: bool,
    /// Leaves visited across all iterations
    pub total_leaves: u64,
}

impl Solution {
    /// The proven outcome, if the bounds have met.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.result
            .is_exact()
            .then(|| Verdict::from_value(self.result.lower_bound, self.white_to_move))
    }

    /// The principal variation in absolute coordinates.
    #[must_use]
    pub fn pv_string(&self) -> String {
        format_variation(&self.pv, self.white_to_move)
    }
}

impl Solver {
    /// Deepen one ply at a time, searching each iteration inside the bounds
    /// the previous one proved, until the value is exact or the configured
    /// maximum depth is reached.
    pub fn solve(&mut self, setup: &Setup, reporter: &dyn Reporter) -> Result<Solution, SearchError> {
        let mut lower = Value::Loss;
        let mut upper = Value::Win;
        let mut solution = Solution {
            result: SearchResult::new(lower, upper, 0),
            depth: 0,
            pv: Vec::new(),
            white_to_move: setup.white_to_move,
            total_leaves: 0,
        };

        for depth in 1..=self.config.max_depth {
            let start = Instant::now();
            let mut pv = Vec::new();
            let result = self.search(depth, &setup.position, lower, upper, &mut pv)?;
            let elapsed = start.elapsed();

            solution.result = result;
            solution.depth = depth;
            solution.pv = pv;
            solution.total_leaves += result.leaf_count;

            debug!(
                "iteration {depth}: bounds ({}, {}) leaves {} nodes {}",
                result.lower_bound,
                result.upper_bound,
                result.leaf_count,
                self.stats.nodes
            );
            reporter.iteration(&IterationInfo {
                depth,
                lower_bound: result.lower_bound,
                upper_bound: result.upper_bound,
                leaves: result.leaf_count,
                elapsed,
                pv: solution.pv_string(),
            });

            if result.is_exact() {
                break;
            }
            lower = result.lower_bound;
            upper = result.upper_bound;
        }

        match solution.verdict() {
            Some(verdict) => info!("solved at depth {}: {verdict}", solution.depth),
            None => info!(
                "depth limit {} reached with bounds ({}, {})",
                solution.depth, solution.result.lower_bound, solution.result.upper_bound
            ),
        }
        Ok(solution)
    }
}
