mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use pawns::attack_coordinates as pawn_attack_coordinates;

use super::position::Board;
use super::{Coordinate, Move, Piece, PieceKind, Position};

impl Piece {
    /// Every pseudo-legal move for this piece in `position`.
    ///
    /// The moves are geometrically valid but may leave the mover's own king
    /// attacked; [`crate::board::Player::make_move`] applies that filter.
    #[must_use]
    pub fn pseudo_legal_moves(&self, position: &Position) -> Vec<Move> {
        self.generate_moves(position.board())
    }

    pub(crate) fn generate_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind() {
            PieceKind::Pawn => pawns::generate_pawn_moves(self, board),
            PieceKind::Knight => knights::generate_knight_moves(self, board),
            PieceKind::Bishop => sliders::generate_slider_moves(self, board, &sliders::BISHOP_VECTORS),
            PieceKind::Rook => sliders::generate_slider_moves(self, board, &sliders::ROOK_VECTORS),
            PieceKind::Queen => sliders::generate_slider_moves(self, board, &sliders::QUEEN_VECTORS),
            PieceKind::King => kings::generate_king_moves(self, board),
        }
    }
}

/// Pseudo-legal moves for a whole side, in piece order.
pub(crate) fn generate_pseudo_moves(pieces: &[Piece], board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(pieces.len() * 8);
    for piece in pieces {
        moves.extend(piece.generate_moves(board));
    }
    moves
}

/// A one-step move onto `destination`: quiet if empty, a capture if an
/// opposing piece stands there, nothing if it holds one of our own.
fn step_move(piece: &Piece, board: &Board, destination: Coordinate) -> Option<Move> {
    match board.piece_at(destination) {
        None => Some(Move::Quiet {
            piece: *piece,
            destination,
        }),
        Some(occupant) if occupant.alliance() != piece.alliance() => Some(Move::Capture {
            piece: *piece,
            destination,
            captured: *occupant,
        }),
        Some(_) => None,
    }
}

/// True when an opposing move onto `coordinate` would capture a piece there.
///
/// Pawn advances and castles are skipped since neither can capture. Pawn
/// diagonals are checked geometrically, so empty squares covered by a pawn
/// count as attacked too. Castling relies on this: a king may not cross a
/// square a pawn covers (see `test_transit_square_attacked_by_pawn` in
/// `player.rs`).
pub(crate) fn is_threatened(coordinate: Coordinate, moves: &[Move], pieces: &[Piece]) -> bool {
    moves
        .iter()
        .any(|m| m.destination() == coordinate && !m.is_castle() && !m.is_pawn_advance())
        || pieces
            .iter()
            .filter(|p| p.is_pawn())
            .any(|p| pawn_attack_coordinates(p).any(|c| c == coordinate))
}

/// Moves from `moves` landing on `coordinate`.
pub(crate) fn attacks_on(coordinate: Coordinate, moves: &[Move]) -> impl Iterator<Item = &Move> {
    moves.iter().filter(move |m| m.destination() == coordinate)
}
