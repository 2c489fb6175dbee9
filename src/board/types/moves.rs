//! Move variants.
//!
//! A `Move` carries the moving piece as it stood before the move, so two moves
//! between the same squares in different positions compare unequal when the
//! pieces differ (for instance in their moved flag). Moves are only meaningful
//! against the position they were generated from.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::piece::{Piece, PieceKind};

/// A pseudo-legal move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Any non-capturing move that is not a pawn jump, castle or promotion.
    Quiet {
        piece: Piece,
        destination: Coordinate,
    },
    /// Any capture of a piece standing on the destination.
    Capture {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    /// A pawn advancing two squares from its start rank.
    PawnJump {
        pawn: Piece,
        destination: Coordinate,
    },
    /// A pawn capturing the pawn that just jumped past it.
    EnPassant {
        pawn: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    /// A pawn reaching the last rank, with or without a capture.
    Promotion {
        pawn: Piece,
        destination: Coordinate,
        captured: Option<Piece>,
    },
    KingSideCastle {
        king: Piece,
        destination: Coordinate,
        rook: Piece,
        rook_destination: Coordinate,
    },
    QueenSideCastle {
        king: Piece,
        destination: Coordinate,
        rook: Piece,
        rook_destination: Coordinate,
    },
}

impl Move {
    /// The piece that moves, as it stood before the move.
    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> Piece {
        match *self {
            Move::Quiet { piece, .. } | Move::Capture { piece, .. } => piece,
            Move::PawnJump { pawn, .. }
            | Move::EnPassant { pawn, .. }
            | Move::Promotion { pawn, .. } => pawn,
            Move::KingSideCastle { king, .. } | Move::QueenSideCastle { king, .. } => king,
        }
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Coordinate {
        self.moved_piece().coordinate()
    }

    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Coordinate {
        match *self {
            Move::Quiet { destination, .. }
            | Move::Capture { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::EnPassant { destination, .. }
            | Move::Promotion { destination, .. }
            | Move::KingSideCastle { destination, .. }
            | Move::QueenSideCastle { destination, .. } => destination,
        }
    }

    /// The piece removed from the board by this move, if any.
    #[inline]
    #[must_use]
    pub const fn captured_piece(&self) -> Option<Piece> {
        match *self {
            Move::Capture { captured, .. } | Move::EnPassant { captured, .. } => Some(captured),
            Move::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    /// The rook taking part in a castle.
    #[inline]
    #[must_use]
    pub const fn castle_rook(&self) -> Option<Piece> {
        match *self {
            Move::KingSideCastle { rook, .. } | Move::QueenSideCastle { rook, .. } => Some(rook),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(self, Move::KingSideCastle { .. } | Move::QueenSideCastle { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_jump(&self) -> bool {
        matches!(self, Move::PawnJump { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    /// True for pawn moves that go straight ahead. These never threaten the
    /// destination square.
    #[inline]
    #[must_use]
    pub const fn is_pawn_advance(&self) -> bool {
        match *self {
            Move::Quiet { piece, .. } => piece.is_pawn(),
            Move::PawnJump { .. } => true,
            Move::Promotion { captured, .. } => captured.is_none(),
            _ => false,
        }
    }

    /// The piece that ends up on the destination.
    #[must_use]
    pub const fn resulting_piece(&self) -> Piece {
        let moved = self.moved_piece().moved_to(self.destination());
        if self.is_promotion() {
            moved.promoted()
        } else {
            moved
        }
    }

    /// Coordinate form, e.g. `e2e4` or `e7e8q`.
    #[must_use]
    pub fn to_coordinate_string(&self) -> String {
        let mut out = format!("{}{}", self.origin(), self.destination());
        if self.is_promotion() {
            out.push('q');
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin_file = &self.origin().notation()[..1];
        match *self {
            Move::KingSideCastle { .. } => write!(f, "O-O"),
            Move::QueenSideCastle { .. } => write!(f, "O-O-O"),
            Move::PawnJump { destination, .. } => write!(f, "{destination}"),
            Move::EnPassant { destination, .. } => write!(f, "{origin_file}x{destination}"),
            Move::Promotion {
                destination,
                captured,
                ..
            } => match captured {
                Some(_) => write!(f, "{origin_file}x{destination}=Q"),
                None => write!(f, "{destination}=Q"),
            },
            Move::Quiet { piece, destination } => match piece.kind() {
                PieceKind::Pawn => write!(f, "{destination}"),
                kind => write!(f, "{kind}{destination}"),
            },
            Move::Capture {
                piece, destination, ..
            } => match piece.kind() {
                PieceKind::Pawn => write!(f, "{origin_file}x{destination}"),
                kind => write!(f, "{kind}x{destination}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::coordinate::coord;
    use crate::board::types::piece::Alliance;

    fn white(kind: PieceKind, at: &str) -> Piece {
        Piece::new(kind, coord(at), Alliance::White)
    }

    fn black(kind: PieceKind, at: &str) -> Piece {
        Piece::new(kind, coord(at), Alliance::Black)
    }

    #[test]
    fn test_accessors() {
        let mv = Move::Capture {
            piece: white(PieceKind::Bishop, "c4"),
            destination: coord("f7"),
            captured: black(PieceKind::Pawn, "f7"),
        };
        assert_eq!(mv.origin(), coord("c4"));
        assert_eq!(mv.destination(), coord("f7"));
        assert!(mv.is_capture());
        assert!(!mv.is_castle());
        assert_eq!(mv.resulting_piece().coordinate(), coord("f7"));
        assert!(mv.resulting_piece().has_moved());
    }

    #[test]
    fn test_display_forms() {
        let quiet = Move::Quiet {
            piece: white(PieceKind::Knight, "g1"),
            destination: coord("f3"),
        };
        assert_eq!(quiet.to_string(), "Nf3");

        let push = Move::Quiet {
            piece: white(PieceKind::Pawn, "e3"),
            destination: coord("e4"),
        };
        assert_eq!(push.to_string(), "e4");

        let jump = Move::PawnJump {
            pawn: white(PieceKind::Pawn, "d2"),
            destination: coord("d4"),
        };
        assert_eq!(jump.to_string(), "d4");
        assert_eq!(jump.to_coordinate_string(), "d2d4");

        let pawn_capture = Move::Capture {
            piece: white(PieceKind::Pawn, "e4"),
            destination: coord("d5"),
            captured: black(PieceKind::Pawn, "d5"),
        };
        assert_eq!(pawn_capture.to_string(), "exd5");

        let promotion = Move::Promotion {
            pawn: white(PieceKind::Pawn, "a7"),
            destination: coord("b8"),
            captured: Some(black(PieceKind::Knight, "b8")),
        };
        assert_eq!(promotion.to_string(), "axb8=Q");
        assert_eq!(promotion.to_coordinate_string(), "a7b8q");

        let castle = Move::QueenSideCastle {
            king: black(PieceKind::King, "e8"),
            destination: coord("c8"),
            rook: black(PieceKind::Rook, "a8"),
            rook_destination: coord("d8"),
        };
        assert_eq!(castle.to_string(), "O-O-O");
    }

    #[test]
    fn test_pawn_advance_classification() {
        let jump = Move::PawnJump {
            pawn: black(PieceKind::Pawn, "c7"),
            destination: coord("c5"),
        };
        assert!(jump.is_pawn_advance());

        let promotion_push = Move::Promotion {
            pawn: black(PieceKind::Pawn, "c2"),
            destination: coord("c1"),
            captured: None,
        };
        assert!(promotion_push.is_pawn_advance());
        assert_eq!(promotion_push.resulting_piece().kind(), PieceKind::Queen);

        let king_step = Move::Quiet {
            piece: black(PieceKind::King, "e8"),
            destination: coord("e7"),
        };
        assert!(!king_step.is_pawn_advance());
    }

    #[test]
    fn test_moves_differ_by_piece_state() {
        let fresh = Move::Quiet {
            piece: white(PieceKind::Rook, "a1"),
            destination: coord("a2"),
        };
        let moved = Move::Quiet {
            piece: Piece::with_moved(PieceKind::Rook, coord("a1"), Alliance::White, true),
            destination: coord("a2"),
        };
        assert_ne!(fresh, moved);
    }
}
