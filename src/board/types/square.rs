//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square as a bit index 0-63.
///
/// Numbering is `rank * 8 + (7 - file)`: bit 0 is h1, bit 7 is a1 and bit 63
/// is a8. Column 0 is therefore the h-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    /// Create a square from rank (0 = rank 1) and file (0 = file a)
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + (7 - file)) as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        7 - (self.0 % 8) as usize
    }

    /// Bit column within the rank; 0 is the h-file.
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// The same square seen from the other side of the board.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// The square with the file mirrored (a <-> h).
    #[inline]
    #[must_use]
    pub const fn mirror_file(self) -> Self {
        Square(self.0 ^ 7)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) {
            return Err(SquareError::FileOutOfRange { file: file as char });
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::RankOutOfRange { rank: rank as char });
        }
        Ok(Square((rank - b'1') * 8 + (b'h' - file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_bit_layout() {
        assert_eq!("h1".parse::<Square>().unwrap(), Square(0));
        assert_eq!("a1".parse::<Square>().unwrap(), Square(7));
        assert_eq!("e2".parse::<Square>().unwrap(), Square(11));
        assert_eq!("a8".parse::<Square>().unwrap(), Square(63));
    }

    #[test]
    fn display_inverts_parse() {
        for idx in 0..64u8 {
            let sq = Square(idx);
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn new_uses_rank_and_file() {
        let sq = Square::new(3, 4).unwrap();
        assert_eq!(sq.to_string(), "e4");
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.file(), 4);
        assert!(Square::new(8, 0).is_none());
    }

    #[test]
    fn flip_mirrors_rank_only() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2.flip().to_string(), "e7");
        assert_eq!(e2.mirror_file().to_string(), "d2");
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(matches!(
            "i1".parse::<Square>(),
            Err(SquareError::FileOutOfRange { file: 'i' })
        ));
        assert!(matches!(
            "a9".parse::<Square>(),
            Err(SquareError::RankOutOfRange { rank: '9' })
        ));
        assert!(matches!(
            "e".parse::<Square>(),
            Err(SquareError::InvalidNotation { .. })
        ));
    }
}
