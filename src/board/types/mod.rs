//! Core value types.
//!
//! - `Coordinate` - square index with the notation and edge tables
//! - `Piece`, `PieceKind` and `Alliance`
//! - `Square` - empty or occupied tile
//! - `Move` - the move variants

mod coordinate;
mod moves;
mod piece;
mod square;

pub use coordinate::{coord, Coordinate, NUM_SQUARES, SQUARES_PER_ROW};
pub use moves::Move;
pub use piece::{Alliance, Piece, PieceKind};
pub use square::Square;
