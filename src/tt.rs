//! Transposition table for caching search results.
//!
//! Entries are grouped into fixed-size buckets selected by `hash % buckets`.
//! Each entry keeps the full position so that two positions sharing a hash
//! are told apart on fetch.

use std::mem;
use std::sync::Arc;

use crate::board::Position;
use crate::search::Value;
use crate::zobrist::ZobristKeys;

/// Default number of slots per bucket
pub const DEFAULT_SLOTS_PER_BUCKET: usize = 4;

/// A cached search result and the window/depth it was computed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub position: Position,
    pub alpha: Value,
    pub beta: Value,
    pub lower_bound: Value,
    pub upper_bound: Value,
    /// Negative for an empty slot
    pub depth: i32,
}

impl TTEntry {
    pub const EMPTY: TTEntry = TTEntry {
        position: Position::START,
        alpha: Value::Loss,
        beta: Value::Win,
        lower_bound: Value::Loss,
        upper_bound: Value::Win,
        depth: -1,
    };

    #[must_use]
    pub fn new(
        position: Position,
        alpha: Value,
        beta: Value,
        lower_bound: Value,
        upper_bound: Value,
        depth: i32,
    ) -> Self {
        TTEntry {
            position,
            alpha,
            beta,
            lower_bound,
            upper_bound,
            depth,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.depth < 0
    }
}

/// Bucketed transposition table.
///
/// Replacement: the first slot in the bucket holding a shallower entry is
/// overwritten; failing that, the bucket's last slot always is.
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    slots_per_bucket: usize,
    num_buckets: usize,
    keys: Arc<ZobristKeys>,
}

impl TranspositionTable {
    /// Create a table with the given geometry using the shared Zobrist keys.
    #[must_use]
    pub fn new(num_buckets: usize, slots_per_bucket: usize) -> Self {
        Self::with_keys(num_buckets, slots_per_bucket, ZobristKeys::shared())
    }

    #[must_use]
    pub fn with_keys(num_buckets: usize, slots_per_bucket: usize, keys: Arc<ZobristKeys>) -> Self {
        // A bucket without slots cannot hold anything.
        let num_buckets = if slots_per_bucket == 0 { 0 } else { num_buckets };
        TranspositionTable {
            entries: vec![TTEntry::EMPTY; num_buckets * slots_per_bucket],
            slots_per_bucket,
            num_buckets,
            keys,
        }
    }

    /// Create a table occupying roughly `size_mb` megabytes.
    #[must_use]
    pub fn with_size_mb(size_mb: usize, slots_per_bucket: usize) -> Self {
        let bucket_bytes = mem::size_of::<TTEntry>() * slots_per_bucket.max(1);
        Self::new((size_mb * 1024 * 1024) / bucket_bytes, slots_per_bucket)
    }

    /// A table that stores nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(0, DEFAULT_SLOTS_PER_BUCKET)
    }

    /// Zobrist hash of `pos` under this table's keys.
    #[inline]
    #[must_use]
    pub fn hash(&self, pos: &Position) -> u64 {
        self.keys.hash(pos)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    #[must_use]
    pub fn slots_per_bucket(&self) -> usize {
        self.slots_per_bucket
    }

    #[inline]
    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.num_buckets as u64) as usize
    }

    fn bucket(&self, hash: u64) -> &[TTEntry] {
        let start = self.bucket_index(hash) * self.slots_per_bucket;
        &self.entries[start..start + self.slots_per_bucket]
    }

    /// Store an entry. `hash` must be the hash of `entry.position`.
    pub fn insert(&mut self, hash: u64, entry: TTEntry) {
        if self.entries.is_empty() {
            return;
        }
        debug_assert_eq!(hash, self.hash(&entry.position), "hash does not match entry");

        let start = self.bucket_index(hash) * self.slots_per_bucket;
        let bucket = &mut self.entries[start..start + self.slots_per_bucket];
        let last = bucket.len() - 1;
        let slot = bucket
            .iter()
            .position(|e| e.depth < entry.depth)
            .unwrap_or(last);
        bucket[slot] = entry;
    }

    /// Find the entry stored for exactly `pos`.
    ///
    /// Whether its depth and window are good enough is up to the caller.
    #[must_use]
    pub fn fetch(&self, hash: u64, pos: &Position) -> Option<&TTEntry> {
        if self.entries.is_empty() {
            return None;
        }
        self.bucket(hash)
            .iter()
            .find(|e| !e.is_empty() && e.position == *pos)
    }

    /// Returns table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample the first 1000 buckets
        let sample = self.num_buckets.min(1000) * self.slots_per_bucket;
        if sample == 0 {
            return 0;
        }
        let occupied = self.entries[..sample].iter().filter(|e| !e.is_empty()).count();
        ((occupied as u64 * 1000) / sample as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.entries.fill(TTEntry::EMPTY);
    }
}
