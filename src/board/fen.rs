//! Peasant FEN: `<board> <side> [<en passant>]`.
//!
//! The board lists ranks 8 to 1 with `P`/`p` for white/black pawns and digits
//! for empty runs, e.g. `8/pppppppp/8/8/8/8/PPPPPPPP/8 w -`. The en passant
//! square is given in absolute coordinates. `startpos` is accepted as a
//! shorthand for the initial setup.

use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::position::Position;
use super::types::{Bitboard, Square};

pub const START_FEN: &str = "8/pppppppp/8/8/8/8/PPPPPPPP/8 w -";

/// A position together with the colour of the side to move.
///
/// `position` is normalized to the mover's perspective: when black is to
/// move it is the flipped board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Setup {
    pub position: Position,
    pub white_to_move: bool,
}

impl Setup {
    pub const START: Setup = Setup {
        position: Position::START,
        white_to_move: true,
    };

    /// Build a setup from absolute (white's view) pawn sets.
    pub fn from_absolute(
        white: Bitboard,
        black: Bitboard,
        en_passant: Option<Square>,
        white_to_move: bool,
    ) -> Result<Self, FenError> {
        let position = if white_to_move {
            Position::try_new(white, black, en_passant)?
        } else {
            Position::try_new(black.vflip(), white.vflip(), en_passant.map(Square::flip))?
        };
        Ok(Setup {
            position,
            white_to_move,
        })
    }

    /// White's and black's pawns plus the en passant square, all in
    /// absolute coordinates.
    #[must_use]
    pub fn to_absolute(&self) -> (Bitboard, Bitboard, Option<Square>) {
        let pos = &self.position;
        if self.white_to_move {
            (pos.my_pawns, pos.their_pawns, pos.en_passant)
        } else {
            (
                pos.their_pawns.vflip(),
                pos.my_pawns.vflip(),
                pos.en_passant.map(Square::flip),
            )
        }
    }

    /// Parse a position from peasant FEN notation.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fen = fen.trim();
        if fen == "startpos" {
            return Ok(Setup::START);
        }

        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0;
            for c in rank_str.chars() {
                match c {
                    '1'..='8' => file += c as usize - '0' as usize,
                    'P' | 'p' => {
                        let sq = Square::new(rank, file).ok_or(FenError::BadRankLength {
                            rank: rank + 1,
                            files: file + 1,
                        })?;
                        if rank == 0 || rank == 7 {
                            return Err(FenError::PawnOnHomeRank {
                                square: sq.to_string(),
                            });
                        }
                        if c == 'P' {
                            white = white.with(sq);
                        } else {
                            black = black.with(sq);
                        }
                        file += 1;
                    }
                    _ => return Err(FenError::InvalidPiece { char: c }),
                }
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        let white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let en_passant = match parts.get(2) {
            None | Some(&"-") => None,
            Some(s) => Some(s.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: s.to_string(),
            })?),
        };

        Setup::from_absolute(white, black, en_passant, white_to_move)
    }

    /// Convert the setup to peasant FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let (white, black, en_passant) = self.to_absolute();
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let Some(sq) = Square::new(rank, file) else {
                    continue;
                };
                let piece = if white.contains(sq) {
                    Some('P')
                } else if black.contains(sq) {
                    Some('p')
                } else {
                    None
                };
                match piece {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = if self.white_to_move { "w" } else { "b" };
        let ep = en_passant.map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!("{} {side} {ep}", rows.join("/"))
    }
}

impl Default for Setup {
    fn default() -> Self {
        Setup::START
    }
}

impl FromStr for Setup {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Setup::try_from_fen(s)
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
