//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::standard();
//! assert_eq!(position.side_to_move(), Alliance::White);
//! ```

pub use super::{
    coord, Alliance, Coordinate, CoordinateError, FenError, Move, MoveStatus, MoveTransition,
    Piece, PieceKind, Player, PlayerStatus, Position, PositionBuilder,
};
