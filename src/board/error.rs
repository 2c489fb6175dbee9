//! Error types for board construction and notation lookups.

use std::fmt;

use super::types::Alliance;

/// Error type for coordinate lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Index outside `[0, 64)`
    OutOfRange { index: usize },
    /// Not a square name such as `e4`
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::OutOfRange { index } => {
                write!(f, "Coordinate {index} out of range (must be 0-63)")
            }
            CoordinateError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for positions that break the board invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// No king for an alliance
    MissingKing { alliance: Alliance },
    /// More than one king for an alliance
    MultipleKings { alliance: Alliance, found: usize },
    /// The en passant pawn is not a pawn of the side that just moved, or is
    /// not on the board
    InvalidEnPassant { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { alliance } => {
                write!(f, "{alliance} has no king")
            }
            PositionError::MultipleKings { alliance, found } => {
                write!(f, "{alliance} has {found} kings, expected exactly one")
            }
            PositionError::InvalidEnPassant { notation } => {
                write!(f, "Invalid en passant pawn on '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// The placement parsed but is not a valid position
    InvalidPosition { reason: PositionError },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidPosition { reason } => {
                write!(f, "FEN describes an invalid position: {reason}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidPosition { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(reason: PositionError) -> Self {
        FenError::InvalidPosition { reason }
    }
}
