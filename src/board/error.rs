//! Error types for position notation.

use std::fmt;

/// Error type for peasant FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Needs a board and a side to move, optionally an en passant square
    WrongFieldCount { found: usize },
    /// Board section does not have 8 ranks
    WrongRankCount { found: usize },
    /// Invalid character in the board section
    InvalidPiece { char: char },
    /// A rank describes more or fewer than 8 files
    BadRankLength { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// A pawn stands on rank 1 or rank 8
    PawnOnHomeRank { square: String },
    /// Board parsed but the resulting position is inconsistent
    InvalidPosition(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 2 or 3 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::PawnOnHomeRank { square } => {
                write!(f, "Pawn on home rank square {square}")
            }
            FenError::InvalidPosition(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidPosition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(e: PositionError) -> Self {
        FenError::InvalidPosition(e)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File letter outside a-h
    FileOutOfRange { file: char },
    /// Rank digit outside 1-8
    RankOutOfRange { rank: char },
    /// Not a two-character coordinate
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfRange { file } => {
                write!(f, "File '{file}' out of range (must be a-h)")
            }
            SquareError::RankOutOfRange { rank } => {
                write!(f, "Rank '{rank}' out of range (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions that break the board invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Both sides have a pawn on the same square
    Overlap { squares: u64 },
    /// En passant square no double advance could have produced
    BadEnPassant { square: u8 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::Overlap { squares } => {
                write!(f, "Pawn sets overlap on squares {squares:#018x}")
            }
            PositionError::BadEnPassant { square } => {
                write!(f, "No double advance can have passed over square {square}")
            }
        }
    }
}

impl std::error::Error for PositionError {}
