//! Core board types.
//!
//! - `Bitboard` - 64-bit pawn set
//! - `Square` - bit index with algebraic notation
//! - `Move` - source/destination pair

mod bitboard;
mod moves;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{format_variation, Move, MAX_DEPTH};
pub use square::Square;
