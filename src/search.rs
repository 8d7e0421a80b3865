//! Exhaustive negamax search over {loss, draw, win}.
//!
//! Features:
//! - Alpha-beta pruning over a three-valued window
//! - Transposition table shared by every node, with optional cutoffs
//! - Principal variation collection
//! - Iterative deepening driver that narrows the window to the previous
//!   iteration's bounds until the value is proven

mod error;
mod report;
mod solve;
mod value;

use log::trace;

use crate::board::{Move, Position, MAX_DEPTH};
use crate::tt::{TTEntry, TranspositionTable, DEFAULT_SLOTS_PER_BUCKET};

pub use error::SearchError;
pub use report::{IterationInfo, PerftInfo, Reporter, SilentReporter, StdoutReporter};
pub use solve::{Solution, Verdict};
pub use value::{SearchResult, Value};

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 64;

/// Tunable search settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub tt_buckets: usize,
    pub tt_slots_per_bucket: usize,
    /// Return cached bounds when a deep enough entry covers the window
    pub tt_cutoffs: bool,
    /// Deepest iteration the driver will attempt
    pub max_depth: usize,
}

impl SearchConfig {
    /// Size the table to roughly `size_mb` megabytes.
    #[must_use]
    pub fn with_hash_mb(size_mb: usize, slots_per_bucket: usize) -> Self {
        let bucket_bytes = std::mem::size_of::<TTEntry>() * slots_per_bucket.max(1);
        SearchConfig {
            tt_buckets: (size_mb * 1024 * 1024) / bucket_bytes,
            tt_slots_per_bucket: slots_per_bucket,
            ..SearchConfig::default()
        }
    }

    /// A configuration with no transposition table at all.
    #[must_use]
    pub fn without_table() -> Self {
        SearchConfig {
            tt_buckets: 0,
            tt_cutoffs: false,
            ..SearchConfig::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        let bucket_bytes = std::mem::size_of::<TTEntry>() * DEFAULT_SLOTS_PER_BUCKET;
        SearchConfig {
            tt_buckets: (DEFAULT_TT_MB * 1024 * 1024) / bucket_bytes,
            tt_slots_per_bucket: DEFAULT_SLOTS_PER_BUCKET,
            tt_cutoffs: true,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_probes: u64,
    pub tt_hits: u64,
    pub tt_cutoffs: u64,
    pub beta_cutoffs: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Owns the transposition table and runs searches against it.
pub struct Solver {
    config: SearchConfig,
    tt: TranspositionTable,
    stats: SearchStats,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new(SearchConfig::default())
    }
}

impl Solver {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let tt = TranspositionTable::new(config.tt_buckets, config.tt_slots_per_bucket);
        Solver::with_table(config, tt)
    }

    /// Use a caller-built table (for example with custom Zobrist keys).
    #[must_use]
    pub fn with_table(config: SearchConfig, tt: TranspositionTable) -> Self {
        Solver {
            config,
            tt,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Drop all cached results and statistics.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.stats.reset();
    }

    /// Search `pos` to `depth` plies with window `[alpha, beta]`.
    ///
    /// `pv` must be empty; it receives the principal variation, each move in
    /// the frame of the side making it.
    pub fn search(
        &mut self,
        depth: usize,
        pos: &Position,
        alpha: Value,
        beta: Value,
        pv: &mut Vec<Move>,
    ) -> Result<SearchResult, SearchError> {
        if alpha > beta {
            return Err(SearchError::InvalidWindow { alpha, beta });
        }
        if depth > MAX_DEPTH {
            return Err(SearchError::DepthTooLarge {
                depth,
                max: MAX_DEPTH,
            });
        }
        Position::try_new(pos.my_pawns, pos.their_pawns, pos.en_passant)?;

        let result = self.search_node(depth, pos, alpha, beta, pv);
        trace!(
            "search depth {depth}: nodes {} tt probes {} hits {} cutoffs {} hashfull {}",
            self.stats.nodes,
            self.stats.tt_probes,
            self.stats.tt_hits,
            self.stats.tt_cutoffs,
            self.tt.hashfull_per_mille()
        );
        Ok(result)
    }

    fn search_node(
        &mut self,
        depth: usize,
        pos: &Position,
        alpha: Value,
        beta: Value,
        pv: &mut Vec<Move>,
    ) -> SearchResult {
        debug_assert!(pv.is_empty(), "principal variation buffer must start empty");
        debug_assert!(alpha <= beta);
        self.stats.nodes += 1;

        // Skip hashing when there is nowhere to store the result.
        let hash = if self.tt.capacity() > 0 {
            self.tt.hash(pos)
        } else {
            0
        };
        let ply_depth = depth as i32;

        if pos.is_lost() {
            self.tt.insert(
                hash,
                TTEntry::new(*pos, Value::Loss, Value::Win, Value::Loss, Value::Loss, ply_depth),
            );
            let v = Value::Loss.clamp(alpha, beta);
            return SearchResult::new(v, v, 1);
        }

        if depth == 0 {
            // Nothing is known at the horizon.
            self.tt.insert(
                hash,
                TTEntry::new(*pos, Value::Loss, Value::Win, Value::Loss, Value::Win, 0),
            );
            return SearchResult::new(alpha, beta, 1);
        }

        if self.config.tt_cutoffs {
            self.stats.tt_probes += 1;
            if let Some(entry) = self.tt.fetch(hash, pos) {
                self.stats.tt_hits += 1;
                if entry.depth >= ply_depth && entry.alpha <= alpha && entry.beta >= beta {
                    self.stats.tt_cutoffs += 1;
                    return SearchResult::new(
                        entry.lower_bound.clamp(alpha, beta),
                        entry.upper_bound.clamp(alpha, beta),
                        1,
                    );
                }
            }
        }

        let moves = pos.generate_moves();
        if moves.is_empty() {
            // Stalemate
            self.tt.insert(
                hash,
                TTEntry::new(*pos, Value::Loss, Value::Win, Value::Draw, Value::Draw, ply_depth),
            );
            let v = Value::Draw.clamp(alpha, beta);
            return SearchResult::new(v, v, 1);
        }

        let original_alpha = alpha;
        let mut alpha = alpha;
        let mut best_lower = Value::Loss;
        let mut best_upper = Value::Loss;
        let mut leaves = 0u64;
        let mut child_pv = Vec::with_capacity(depth);

        for child_move in &moves {
            child_pv.clear();
            let child = self
                .search_node(depth - 1, &child_move.position.flip(), -beta, -alpha, &mut child_pv)
                .negate();
            leaves += child.leaf_count;
            best_lower = best_lower.max(child.lower_bound);

            // Ties also replace the line so a PV exists even when nothing
            // beats the initial alpha.
            if child.lower_bound >= alpha {
                alpha = child.lower_bound;
                pv.clear();
                pv.push(child_move.mv);
                pv.extend_from_slice(&child_pv);
            }
            if alpha >= beta {
                // Unsearched siblings could still do better.
                self.stats.beta_cutoffs += 1;
                best_upper = Value::Win;
                break;
            }
            best_upper = best_upper.max(child.upper_bound);
        }

        self.tt.insert(
            hash,
            TTEntry::new(*pos, original_alpha, beta, best_lower, best_upper, ply_depth),
        );
        SearchResult::new(
            best_lower.clamp(original_alpha, beta),
            best_upper.clamp(original_alpha, beta),
            leaves,
        )
    }
}
