//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `movegen.rs` - Individual move rules and edge cases
//! - `proptest.rs` - Property-based tests over random games

mod proptest;
