//! Zobrist hashing for peasant chess positions.
//!
//! Each pawn bitboard is split into four 16-bit chunks, and every chunk
//! value has its own random code per side, so a whole position hashes with
//! eight table lookups plus one for the en passant square.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::Position;

const CHUNKS: usize = 4;
const CHUNK_VALUES: usize = 0x10000;
const DEFAULT_SEED: u64 = 1234567890;

/// Random codes for hashing positions. Immutable once built.
pub struct ZobristKeys {
    // codes[(side * CHUNKS + chunk) * CHUNK_VALUES + value]; side 0 = mine
    codes: Box<[u64]>,
    en_passant: [u64; 64],
}

impl ZobristKeys {
    /// Build keys from a fixed seed so hashes are reproducible across runs.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut codes = vec![0u64; 2 * CHUNKS * CHUNK_VALUES].into_boxed_slice();
        for code in codes.iter_mut() {
            *code = rng.gen();
        }
        let mut en_passant = [0u64; 64];
        for key in &mut en_passant {
            *key = rng.gen();
        }
        ZobristKeys { codes, en_passant }
    }

    /// Process-wide keys, built on first use.
    #[must_use]
    pub fn shared() -> Arc<ZobristKeys> {
        Arc::clone(&SHARED_KEYS)
    }

    #[inline]
    fn chunk_code(&self, side: usize, chunk: usize, value: u64) -> u64 {
        self.codes[(side * CHUNKS + chunk) * CHUNK_VALUES + value as usize]
    }

    #[inline]
    fn hash_board(&self, side: usize, board: u64) -> u64 {
        let mut hash = 0;
        for chunk in 0..CHUNKS {
            hash ^= self.chunk_code(side, chunk, (board >> (16 * chunk)) & 0xFFFF);
        }
        hash
    }

    /// Hash a position.
    #[must_use]
    pub fn hash(&self, pos: &Position) -> u64 {
        let ep = pos.en_passant.map_or(0, |sq| self.en_passant[sq.index()]);
        ep ^ self.hash_board(0, pos.my_pawns.0) ^ self.hash_board(1, pos.their_pawns.0)
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED_KEYS: Lazy<Arc<ZobristKeys>> = Lazy::new(|| Arc::new(ZobristKeys::new()));
