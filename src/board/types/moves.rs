//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Maximum number of plies a search may recurse.
///
/// A game cannot outlast 16 pawns making at most 6 moves each, so this never
/// limits a solve; it only bounds stack usage.
pub const MAX_DEPTH: usize = 128;

/// A pawn move in the mover's own perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// The move as seen from the opponent's side of the board.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        Move {
            from: self.from.flip(),
            to: self.to.flip(),
        }
    }

    /// Translate a move generated for the side to move into absolute
    /// (white's) coordinates.
    #[inline]
    #[must_use]
    pub const fn to_absolute(self, mover_is_white: bool) -> Self {
        if mover_is_white {
            self
        } else {
            self.flip()
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Render a line of play in absolute coordinates.
///
/// Each move is stored from its own mover's perspective, so the colour
/// alternates starting with the side to move at the root.
#[must_use]
pub fn format_variation(line: &[Move], white_to_move: bool) -> String {
    line.iter()
        .enumerate()
        .map(|(ply, mv)| {
            let mover_is_white = white_to_move == (ply % 2 == 0);
            mv.to_absolute(mover_is_white).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
