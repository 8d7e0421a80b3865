pub mod board;
pub mod perft;
pub mod search;
pub mod tt;
pub mod zobrist;

pub use board::{Move, Position, Setup, Square};
pub use search::{SearchConfig, SearchResult, Solver, Value};
pub use tt::TranspositionTable;
