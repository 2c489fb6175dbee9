//! Squares: a coordinate plus at most one occupant.

use std::fmt;

use once_cell::sync::Lazy;

use super::coordinate::{Coordinate, NUM_SQUARES};
use super::piece::Piece;

/// Every empty square, built once. An empty square carries nothing but its
/// coordinate, so all positions share these.
static EMPTY_SQUARES: Lazy<[Square; NUM_SQUARES]> = Lazy::new(|| {
    std::array::from_fn(|idx| Square::Empty(Coordinate::from_index(idx)))
});

/// A single board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    Empty(Coordinate),
    Occupied(Coordinate, Piece),
}

impl Square {
    /// The square at `coordinate`, occupied by `piece` if one is given.
    ///
    /// Empty squares come from the shared cache.
    #[must_use]
    pub fn create(coordinate: Coordinate, piece: Option<Piece>) -> Square {
        match piece {
            Some(piece) => Square::Occupied(coordinate, piece),
            None => EMPTY_SQUARES[coordinate.index()],
        }
    }

    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            Square::Empty(coordinate) | Square::Occupied(coordinate, _) => *coordinate,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Square::Occupied(..))
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Square::Empty(_) => None,
            Square::Occupied(_, piece) => Some(piece),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty(_) => write!(f, "-"),
            Square::Occupied(_, piece) => write!(f, "{piece}"),
        }
    }
}
