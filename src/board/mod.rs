//! Peasant chess board representation and move generation.
//!
//! Positions are stored from the side to move's point of view, so one move
//! generator serves both colours. After a move the resulting position is
//! flipped to hand the turn over.
//!
//! # Example
//! ```
//! use peasant_chess::board::Position;
//!
//! let moves = Position::START.generate_moves();
//! assert_eq!(moves.len(), 16);
//! ```

mod error;
mod fen;
mod movegen;
mod position;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, PositionError, SquareError};
pub use fen::{Setup, START_FEN};
pub use movegen::{GeneratedMove, MoveList};
pub use position::Position;
pub use types::{format_variation, Bitboard, BitboardIter, Move, Square, MAX_DEPTH};
