//! Game values and search results.

use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Theoretical outcome for the side to move.
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Loss = -1,
    Draw = 0,
    Win = 1,
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    #[must_use]
    pub const fn from_i8(v: i8) -> Option<Self> {
        match v {
            -1 => Some(Value::Loss),
            0 => Some(Value::Draw),
            1 => Some(Value::Win),
            _ => None,
        }
    }
}

impl Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        match self {
            Value::Loss => Value::Win,
            Value::Draw => Value::Draw,
            Value::Win => Value::Loss,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Proven range for the side to move's outcome, clamped to the window the
/// node was searched with.
///
/// If the true value is `v`, then `v` clamped to `[alpha, beta]` lies in
/// `[lower_bound, upper_bound]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    pub lower_bound: Value,
    pub upper_bound: Value,
    pub leaf_count: u64,
}

impl SearchResult {
    #[inline]
    #[must_use]
    pub fn new(lower_bound: Value, upper_bound: Value, leaf_count: u64) -> Self {
        debug_assert!(lower_bound <= upper_bound, "inverted bounds");
        SearchResult {
            lower_bound,
            upper_bound,
            leaf_count,
        }
    }

    /// The same result seen from the opponent's side.
    #[inline]
    #[must_use]
    pub fn negate(self) -> Self {
        SearchResult {
            lower_bound: -self.upper_bound,
            upper_bound: -self.lower_bound,
            leaf_count: self.leaf_count,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> (Value, Value) {
        (self.lower_bound, self.upper_bound)
    }
}
