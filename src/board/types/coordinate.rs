//! Board coordinates and the static notation / edge tables.
//!
//! Coordinates are linear indices in print order: index 0 is `a8` (top-left
//! when the board is printed) and index 63 is `h1`. Moving "up" the board for
//! White therefore decreases the index.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Number of squares in one row.
pub const SQUARES_PER_ROW: usize = 8;

const fn init_column(column: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut idx = column;
    while idx < NUM_SQUARES {
        table[idx] = true;
        idx += SQUARES_PER_ROW;
    }
    table
}

const fn init_row(first: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut idx = first;
    while idx < first + SQUARES_PER_ROW {
        table[idx] = true;
        idx += 1;
    }
    table
}

/// Squares on the `a` file.
pub(crate) static FIRST_COLUMN: [bool; NUM_SQUARES] = init_column(0);
/// Squares on the `b` file.
pub(crate) static SECOND_COLUMN: [bool; NUM_SQUARES] = init_column(1);
/// Squares on the `g` file.
pub(crate) static SEVENTH_COLUMN: [bool; NUM_SQUARES] = init_column(6);
/// Squares on the `h` file.
pub(crate) static EIGHTH_COLUMN: [bool; NUM_SQUARES] = init_column(7);

/// The 8th rank (top row in print order).
pub(crate) static FIRST_ROW: [bool; NUM_SQUARES] = init_row(0);
/// The 1st rank (bottom row in print order).
pub(crate) static EIGHTH_ROW: [bool; NUM_SQUARES] = init_row(56);

static ALGEBRAIC_NOTATION: Lazy<[String; NUM_SQUARES]> = Lazy::new(|| {
    std::array::from_fn(|idx| {
        let file = (b'a' + (idx % SQUARES_PER_ROW) as u8) as char;
        let rank = SQUARES_PER_ROW - idx / SQUARES_PER_ROW;
        format!("{file}{rank}")
    })
});

static NOTATION_TO_COORDINATE: Lazy<HashMap<&'static str, Coordinate>> = Lazy::new(|| {
    ALGEBRAIC_NOTATION
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), Coordinate(idx as u8)))
        .collect()
});

/// A square index in `[0, 64)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Coordinate(u8);

impl Coordinate {
    /// Every coordinate in index order (`a8`, `b8`, ..., `h1`).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_SQUARES as u8).map(Coordinate)
    }

    /// Create a coordinate with bounds checking.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Coordinate(index as u8))
        } else {
            None
        }
    }

    /// Create a coordinate from a file (0 = `a`) and a rank (1..=8).
    #[must_use]
    pub fn from_file_rank(file: usize, rank: usize) -> Option<Self> {
        if file < SQUARES_PER_ROW && (1..=SQUARES_PER_ROW).contains(&rank) {
            Some(Coordinate(((SQUARES_PER_ROW - rank) * SQUARES_PER_ROW + file) as u8))
        } else {
            None
        }
    }

    /// Create a coordinate from an index known to be on the board.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES);
        Coordinate(index as u8)
    }

    /// Look up a coordinate by its algebraic name, e.g. `"e4"`.
    pub fn from_notation(notation: &str) -> Result<Self, CoordinateError> {
        NOTATION_TO_COORDINATE
            .get(notation)
            .copied()
            .ok_or_else(|| CoordinateError::InvalidNotation {
                notation: notation.to_string(),
            })
    }

    /// The algebraic name of this coordinate.
    #[must_use]
    pub fn notation(self) -> &'static str {
        ALGEBRAIC_NOTATION[self.index()].as_str()
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File index, 0 for `a` through 7 for `h`.
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.index() % SQUARES_PER_ROW
    }

    /// Chess rank, 1 through 8.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        SQUARES_PER_ROW - self.index() / SQUARES_PER_ROW
    }

    /// The coordinate `delta` indices away, if it is still on the board.
    ///
    /// This is raw index arithmetic: it does not detect wrapping across a file
    /// edge. Callers consult the column tables first.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if (0..NUM_SQUARES as i16).contains(&target) {
            Some(Coordinate(target as u8))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn is_first_column(self) -> bool {
        FIRST_COLUMN[self.index()]
    }

    #[inline]
    pub(crate) fn is_second_column(self) -> bool {
        SECOND_COLUMN[self.index()]
    }

    #[inline]
    pub(crate) fn is_seventh_column(self) -> bool {
        SEVENTH_COLUMN[self.index()]
    }

    #[inline]
    pub(crate) fn is_eighth_column(self) -> bool {
        EIGHTH_COLUMN[self.index()]
    }

    /// True on the 8th rank.
    #[inline]
    pub(crate) fn is_first_row(self) -> bool {
        FIRST_ROW[self.index()]
    }

    /// True on the 1st rank.
    #[inline]
    pub(crate) fn is_eighth_row(self) -> bool {
        EIGHTH_ROW[self.index()]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::from_notation(s)
    }
}

impl TryFrom<usize> for Coordinate {
    type Error = CoordinateError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Coordinate::new(index).ok_or(CoordinateError::OutOfRange { index })
    }
}

impl TryFrom<u8> for Coordinate {
    type Error = CoordinateError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Coordinate::try_from(usize::from(index))
    }
}

impl From<Coordinate> for u8 {
    fn from(coordinate: Coordinate) -> u8 {
        coordinate.0
    }
}

impl From<Coordinate> for usize {
    fn from(coordinate: Coordinate) -> usize {
        coordinate.index()
    }
}

/// Shorthand for a coordinate literal in tests and tables.
///
/// # Panics
/// Panics if `notation` is not a valid square name.
#[must_use]
pub fn coord(notation: &str) -> Coordinate {
    Coordinate::from_notation(notation).unwrap_or_else(|err| panic!("{err}"))
}
