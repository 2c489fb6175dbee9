//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{coord, Alliance, Piece, PieceKind, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .piece(Piece::new(PieceKind::King, coord("e1"), Alliance::White))
//!     .piece(Piece::new(PieceKind::King, coord("e8"), Alliance::Black))
//!     .piece(Piece::new(PieceKind::Pawn, coord("a2"), Alliance::White))
//!     .side_to_move(Alliance::White)
//!     .build();
//! assert_eq!(position.current_player().legal_moves().len(), 7);
//! ```

use super::error::PositionError;
use super::{Alliance, Coordinate, Piece, PieceKind, Position, NUM_SQUARES};

/// A fluent builder for constructing [`Position`]s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    placements: [Option<Piece>; NUM_SQUARES],
    side_to_move: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder with White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            placements: [None; NUM_SQUARES],
            side_to_move: Alliance::White,
            en_passant_pawn: None,
        }
    }

    /// Create a builder holding the standard opening array.
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Self::new();
        for (file, &kind) in back_rank.iter().enumerate() {
            for (alliance, back, pawns) in [(Alliance::White, 1, 2), (Alliance::Black, 8, 7)] {
                if let Some(at) = Coordinate::from_file_rank(file, back) {
                    builder = builder.piece(Piece::new(kind, at, alliance));
                }
                if let Some(at) = Coordinate::from_file_rank(file, pawns) {
                    builder = builder.piece(Piece::new(PieceKind::Pawn, at, alliance));
                }
            }
        }
        builder
    }

    /// Place a piece on its own coordinate, replacing any earlier occupant.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.placements[piece.coordinate().index()] = Some(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, coordinate: Coordinate) -> Self {
        self.placements[coordinate.index()] = None;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, alliance: Alliance) -> Self {
        self.side_to_move = alliance;
        self
    }

    /// Mark `pawn` as having just jumped, making it capturable en passant.
    ///
    /// The side to move is set to the pawn's opponent.
    #[must_use]
    pub fn en_passant(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self.side_to_move = pawn.alliance().opponent();
        self
    }

    /// Clear the en passant pawn.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_pawn = None;
        self
    }

    /// Build the position, reporting broken invariants.
    pub fn try_build(self) -> Result<Position, PositionError> {
        Position::assemble(self.placements, self.side_to_move, self.en_passant_pawn)
    }

    /// Build the position.
    ///
    /// # Panics
    ///
    /// Panics if an alliance does not have exactly one king, or the en passant
    /// pawn is not a pawn of the side that just moved. Use [`Self::try_build`]
    /// for untrusted input.
    #[must_use]
    pub fn build(self) -> Position {
        match self.try_build() {
            Ok(position) => position,
            Err(err) => panic!("Invalid position: {err}"),
        }
    }
}
