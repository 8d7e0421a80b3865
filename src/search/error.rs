//! Error type for rejected search requests.

use std::fmt;

use super::Value;
use crate::board::PositionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// alpha above beta
    InvalidWindow { alpha: Value, beta: Value },
    /// Depth beyond what the search stack is sized for
    DepthTooLarge { depth: usize, max: usize },
    /// Position breaks the board invariants
    InvalidPosition(PositionError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidWindow { alpha, beta } => {
                write!(f, "Invalid window: alpha {alpha} is above beta {beta}")
            }
            SearchError::DepthTooLarge { depth, max } => {
                write!(f, "Search depth {depth} exceeds the maximum of {max}")
            }
            SearchError::InvalidPosition(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidPosition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PositionError> for SearchError {
    fn from(e: PositionError) -> Self {
        SearchError::InvalidPosition(e)
    }
}
