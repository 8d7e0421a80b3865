//! Pawn move generation.
//!
//! Moves are generated for the side to move in its own frame: pawns advance
//! towards higher bit indices and the double advance starts from bit row 1.

use std::ops::Index;

use super::position::Position;
use super::types::{Bitboard, Move, Square};

/// Upper bound on the number of moves in one position (8 pawns with at most
/// 4 moves each is 32).
pub(crate) const MAX_MOVES: usize = 64;

/// A generated move together with the position it leads to.
///
/// `position` is still in the mover's frame; flip it before handing the
/// turn to the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratedMove {
    pub position: Position,
    pub mv: Move,
    pub is_capture: bool,
}

const EMPTY_GENERATED: GeneratedMove = GeneratedMove {
    position: Position::new(Bitboard::EMPTY, Bitboard::EMPTY, None),
    mv: Move::new(Square(0), Square(0)),
    is_capture: false,
};

/// Fixed-size list of generated moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [GeneratedMove; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_GENERATED; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: GeneratedMove) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[GeneratedMove] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedMove> {
        self.as_slice().iter()
    }

    /// Stable sort putting captures first.
    pub(crate) fn sort_captures_first(&mut self) {
        self.moves[..self.len].sort_by_key(|m| !m.is_capture);
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a GeneratedMove;
    type IntoIter = std::slice::Iter<'a, GeneratedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Index<usize> for MoveList {
    type Output = GeneratedMove;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

impl Position {
    /// Generate every legal move, captures first.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.my_pawns.and(Bitboard::PLAYABLE).iter() {
            let advanced = self.try_advance(&mut moves, from, 8, None);
            if advanced && from.rank() == 1 {
                self.try_advance(&mut moves, from, 16, Some(Square(from.0 + 8)));
            }

            // Column 0 is the h-file, so +7 and +9 would wrap at the edges.
            if from.column() != 0 {
                self.try_capture(&mut moves, from, 7);
            }
            if from.column() != 7 {
                self.try_capture(&mut moves, from, 9);
            }
        }
        moves.sort_captures_first();
        moves
    }

    /// Push a non-capturing advance if the destination is empty.
    ///
    /// Only the destination is checked; a double advance must only be tried
    /// after the single advance succeeded. Returns whether the move was added.
    fn try_advance(
        &self,
        moves: &mut MoveList,
        from: Square,
        offset: u8,
        en_passant: Option<Square>,
    ) -> bool {
        let to = Square(from.0 + offset);
        if self.occupied().contains(to) {
            return false;
        }
        moves.push(GeneratedMove {
            position: Position::new(self.my_pawns.without(from).with(to), self.their_pawns, en_passant),
            mv: Move::new(from, to),
            is_capture: false,
        });
        true
    }

    fn try_capture(&self, moves: &mut MoveList, from: Square, offset: u8) {
        let to = Square(from.0 + offset);
        let en_passant = self.en_passant == Some(to);
        if !self.their_pawns.contains(to) && !en_passant {
            return;
        }
        // An en passant capture takes the pawn that just passed over `to`.
        let captured = if en_passant { Square(to.0 - 8) } else { to };
        moves.push(GeneratedMove {
            position: Position::new(
                self.my_pawns.without(from).with(to),
                self.their_pawns.without(captured),
                None,
            ),
            mv: Move::new(from, to),
            is_capture: true,
        });
    }
}
