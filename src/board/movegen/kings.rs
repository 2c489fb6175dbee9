use super::super::position::Board;
use super::super::{Coordinate, Move, Piece};
use super::step_move;

const CANDIDATE_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

fn is_first_column_exclusion(current: Coordinate, offset: i8) -> bool {
    current.is_first_column() && matches!(offset, -9 | -1 | 7)
}

fn is_eighth_column_exclusion(current: Coordinate, offset: i8) -> bool {
    current.is_eighth_column() && matches!(offset, -7 | 1 | 9)
}

/// Single-step king moves. Castling is added at the player level, where the
/// opponent's moves are known.
pub(crate) fn generate_king_moves(king: &Piece, board: &Board) -> Vec<Move> {
    let from = king.coordinate();
    CANDIDATE_OFFSETS
        .iter()
        .filter(|&&offset| {
            !is_first_column_exclusion(from, offset) && !is_eighth_column_exclusion(from, offset)
        })
        .filter_map(|&offset| from.offset(offset))
        .filter_map(|destination| step_move(king, board, destination))
        .collect()
}
