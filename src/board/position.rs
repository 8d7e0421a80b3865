//! Position representation from the side to move's point of view.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PositionError;
use super::types::{Bitboard, Square};

/// A peasant chess position, always oriented so that the side to move
/// advances from rank 1 towards rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub my_pawns: Bitboard,
    pub their_pawns: Bitboard,
    /// Square passed over by the opponent's double advance on the previous ply
    pub en_passant: Option<Square>,
}

impl Position {
    /// The initial setup: pawns filling ranks 2 and 7, no en passant.
    pub const START: Position = Position {
        my_pawns: Bitboard::RANK_2,
        their_pawns: Bitboard::RANK_7,
        en_passant: None,
    };

    #[must_use]
    pub const fn new(my_pawns: Bitboard, their_pawns: Bitboard, en_passant: Option<Square>) -> Self {
        Position {
            my_pawns,
            their_pawns,
            en_passant,
        }
    }

    /// Build a position, rejecting overlapping pawn sets and en passant
    /// squares that no double advance could have produced (the square must be
    /// empty, on the sixth rank, with an enemy pawn directly in front of it).
    pub fn try_new(
        my_pawns: Bitboard,
        their_pawns: Bitboard,
        en_passant: Option<Square>,
    ) -> Result<Self, PositionError> {
        let overlap = my_pawns.0 & their_pawns.0;
        if overlap != 0 {
            return Err(PositionError::Overlap { squares: overlap });
        }
        if let Some(sq) = en_passant {
            let occupied = my_pawns.or(their_pawns);
            if sq.rank() != 5 || occupied.contains(sq) || !their_pawns.contains(Square(sq.0 - 8)) {
                return Err(PositionError::BadEnPassant { square: sq.0 });
            }
        }
        Ok(Position::new(my_pawns, their_pawns, en_passant))
    }

    /// Hand the move to the opponent: swap the pawn sets and mirror the
    /// ranks so the new mover also advances towards rank 8.
    #[inline]
    #[must_use]
    pub const fn flip(&self) -> Position {
        let en_passant = match self.en_passant {
            Some(sq) => Some(sq.flip()),
            None => None,
        };
        Position {
            my_pawns: self.their_pawns.vflip(),
            their_pawns: self.my_pawns.vflip(),
            en_passant,
        }
    }

    /// The same position with files a and h exchanged.
    #[must_use]
    pub fn mirror_files(&self) -> Position {
        Position {
            my_pawns: self.my_pawns.mirror_files(),
            their_pawns: self.their_pawns.mirror_files(),
            en_passant: self.en_passant.map(Square::mirror_file),
        }
    }

    /// The side to move has lost: it has no pawns left, or an enemy pawn has
    /// reached its first rank.
    #[inline]
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.my_pawns.is_empty() || self.their_pawns.intersects(Bitboard::RANK_1)
    }

    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> Bitboard {
        self.my_pawns.or(self.their_pawns)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}
