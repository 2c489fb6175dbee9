//! Piece kinds, alliances and the piece value type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a letter in either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Nominal material value.
    ///
    /// Pawn=100, Knight=300, Bishop=350, Rook=500, Queen=900, King=10000.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 350,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Both alliances in index order (White=0, Black=1)
    pub const BOTH: [Alliance; 2] = [Alliance::White, Alliance::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Forward direction in index space (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// Whether a pawn of this alliance promotes on `coordinate`
    #[inline]
    #[must_use]
    pub fn is_promotion_square(self, coordinate: Coordinate) -> bool {
        match self {
            Alliance::White => coordinate.is_first_row(),
            Alliance::Black => coordinate.is_eighth_row(),
        }
    }

    /// Rank a pawn of this alliance starts on (2 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Alliance::White => 2,
            Alliance::Black => 7,
        }
    }

    /// Case a piece letter takes for this alliance
    #[inline]
    #[must_use]
    pub fn format_char(self, c: char) -> char {
        match self {
            Alliance::White => c.to_ascii_uppercase(),
            Alliance::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on a coordinate.
///
/// Pieces are values: moving one produces a new `Piece` through
/// [`Piece::moved_to`], the original is never touched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    coordinate: Coordinate,
    alliance: Alliance,
    moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(kind: PieceKind, coordinate: Coordinate, alliance: Alliance) -> Self {
        Piece {
            kind,
            coordinate,
            alliance,
            moved: false,
        }
    }

    /// A piece with an explicit moved flag.
    #[must_use]
    pub const fn with_moved(
        kind: PieceKind,
        coordinate: Coordinate,
        alliance: Alliance,
        moved: bool,
    ) -> Self {
        Piece {
            kind,
            coordinate,
            alliance,
            moved,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// True once any move involving this piece has been applied.
    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    #[inline]
    #[must_use]
    pub const fn is_rook(&self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    /// The same piece standing on `destination`, marked as moved.
    #[must_use]
    pub const fn moved_to(&self, destination: Coordinate) -> Piece {
        Piece {
            coordinate: destination,
            moved: true,
            ..*self
        }
    }

    /// The queen this pawn becomes on its current square.
    #[must_use]
    pub const fn promoted(&self) -> Piece {
        Piece {
            kind: PieceKind::Queen,
            moved: true,
            ..*self
        }
    }

    /// Letter as printed on the board: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.alliance.format_char(self.kind.to_char())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::coordinate::coord;

    #[test]
    fn test_moved_copy_leaves_original() {
        let knight = Piece::new(PieceKind::Knight, coord("g1"), Alliance::White);
        let moved = knight.moved_to(coord("f3"));

        assert!(!knight.has_moved());
        assert_eq!(knight.coordinate(), coord("g1"));
        assert!(moved.has_moved());
        assert_eq!(moved.coordinate(), coord("f3"));
        assert_eq!(moved.kind(), PieceKind::Knight);
        assert_ne!(knight, moved);
    }

    #[test]
    fn test_promotion_is_queen() {
        let pawn = Piece::with_moved(PieceKind::Pawn, coord("a8"), Alliance::White, true);
        let queen = pawn.promoted();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.coordinate(), coord("a8"));
        assert_eq!(queen.alliance(), Alliance::White);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Piece::new(PieceKind::King, coord("e1"), Alliance::White).symbol(), 'K');
        assert_eq!(Piece::new(PieceKind::Knight, coord("b8"), Alliance::Black).symbol(), 'n');
        assert_eq!(PieceKind::from_char('Q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn test_alliance_geometry() {
        assert_eq!(Alliance::White.direction(), -1);
        assert_eq!(Alliance::Black.direction(), 1);
        assert_eq!(Alliance::White.opponent(), Alliance::Black);
        assert!(Alliance::White.is_promotion_square(coord("d8")));
        assert!(Alliance::Black.is_promotion_square(coord("d1")));
        assert!(!Alliance::White.is_promotion_square(coord("d1")));
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(PieceKind::Pawn.value(), 100);
        assert_eq!(PieceKind::Bishop.value(), 350);
        assert!(PieceKind::King.value() > PieceKind::Queen.value());
    }
}
