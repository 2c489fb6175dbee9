pub mod board;

pub use board::{Alliance, Coordinate, Move, Piece, PieceKind, Player, Position};
