//! Chess position representation and rules.
//!
//! Positions are immutable snapshots. Each one carries the pseudo-legal moves
//! of both sides, computed once when it is built; a [`Player`] view applies
//! the self-check filter on top and answers check, checkmate and stalemate
//! queries. Making a move never changes a position, it produces a new one.
//!
//! # Example
//! ```
//! use chess_rules::board::{MoveStatus, Position};
//!
//! let position = Position::standard();
//! let player = position.current_player();
//! assert_eq!(player.legal_moves().len(), 20);
//!
//! let transition = player.make_move_from_notation("e2", "e4").unwrap();
//! assert_eq!(transition.status(), MoveStatus::Done);
//! println!("{}", transition.to_position());
//! ```

mod builder;
mod error;
mod execute;
mod fen;
mod movegen;
mod perft;
mod player;
mod position;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{CoordinateError, FenError, PositionError};
pub use player::{MoveStatus, MoveTransition, Player, PlayerStatus};
pub use position::Position;
pub use types::{coord, Alliance, Coordinate, Move, Piece, PieceKind, Square};
pub use types::{NUM_SQUARES, SQUARES_PER_ROW};
