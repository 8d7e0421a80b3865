//! Bitboard type and operations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A 64-bit bitboard of pawn positions.
///
/// Bit 0 is h1 and bit 63 is a8, seen from the side the board belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Squares a pawn can stand on without the game having ended.
    pub const PLAYABLE: Bitboard = Bitboard(0x00FF_FFFF_FFFF_FF00);

    pub const EMPTY: Bitboard = Bitboard(0);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.0)
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.0) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, sq: Square) -> Self {
        Bitboard(self.0 | (1 << sq.0))
    }

    #[inline]
    #[must_use]
    pub const fn without(self, sq: Square) -> Self {
        Bitboard(self.0 & !(1 << sq.0))
    }

    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }

    /// Mirror the board vertically: rank 1 <-> rank 8, files unchanged.
    #[inline]
    #[must_use]
    pub const fn vflip(self) -> Self {
        Bitboard(self.0.swap_bytes())
    }

    /// Mirror the board horizontally: file a <-> file h, ranks unchanged.
    #[inline]
    #[must_use]
    pub const fn mirror_files(self) -> Self {
        let mut x = self.0;
        x = ((x >> 1) & 0x5555_5555_5555_5555) | ((x & 0x5555_5555_5555_5555) << 1);
        x = ((x >> 2) & 0x3333_3333_3333_3333) | ((x & 0x3333_3333_3333_3333) << 2);
        x = ((x >> 4) & 0x0F0F_0F0F_0F0F_0F0F) | ((x & 0x0F0F_0F0F_0F0F_0F0F) << 4);
        Bitboard(x)
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    Square(idx)
}

/// Iterator over set bits in a Bitboard, lowest square first
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vflip_swaps_ranks_and_keeps_files() {
        assert_eq!(Bitboard::RANK_2.vflip(), Bitboard::RANK_7);
        assert_eq!(Bitboard::RANK_1.vflip(), Bitboard::RANK_8);

        let h1 = Bitboard::from_square(Square(0));
        assert_eq!(h1.vflip(), Bitboard::from_square(Square(56)));

        let e4: Square = "e4".parse().unwrap();
        let e5: Square = "e5".parse().unwrap();
        assert_eq!(Bitboard::from_square(e4).vflip(), Bitboard::from_square(e5));
    }

    #[test]
    fn mirror_files_swaps_a_and_h() {
        let a1: Square = "a1".parse().unwrap();
        let h1: Square = "h1".parse().unwrap();
        assert_eq!(Bitboard::from_square(a1).mirror_files(), Bitboard::from_square(h1));
        assert_eq!(Bitboard::RANK_2.mirror_files(), Bitboard::RANK_2);
    }

    #[test]
    fn iter_yields_squares_low_to_high() {
        let bb = Bitboard(0b1010_0001);
        let squares: Vec<u8> = bb.iter().map(|sq| sq.0).collect();
        assert_eq!(squares, vec![0, 5, 7]);
        assert_eq!(bb.popcount(), 3);
    }

    #[test]
    fn with_and_without_toggle_single_bits() {
        let sq = Square(12);
        let bb = Bitboard::EMPTY.with(sq);
        assert!(bb.contains(sq));
        assert!(bb.without(sq).is_empty());
    }
}
