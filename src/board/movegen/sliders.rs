use super::super::position::Board;
use super::super::{Coordinate, Move, Piece};

pub(crate) const BISHOP_VECTORS: [i8; 4] = [-9, -7, 7, 9];
pub(crate) const ROOK_VECTORS: [i8; 4] = [-8, -1, 1, 8];
pub(crate) const QUEEN_VECTORS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Vectors that step one file left wrap from the `a` file.
fn is_first_column_exclusion(current: Coordinate, vector: i8) -> bool {
    current.is_first_column() && matches!(vector, -9 | -1 | 7)
}

/// Vectors that step one file right wrap from the `h` file.
fn is_eighth_column_exclusion(current: Coordinate, vector: i8) -> bool {
    current.is_eighth_column() && matches!(vector, -7 | 1 | 9)
}

pub(crate) fn generate_slider_moves(piece: &Piece, board: &Board, vectors: &[i8]) -> Vec<Move> {
    let mut moves = Vec::new();

    for &vector in vectors {
        let mut current = piece.coordinate();
        loop {
            if is_first_column_exclusion(current, vector)
                || is_eighth_column_exclusion(current, vector)
            {
                break;
            }
            let Some(next) = current.offset(vector) else {
                break;
            };
            match board.piece_at(next) {
                None => moves.push(Move::Quiet {
                    piece: *piece,
                    destination: next,
                }),
                Some(occupant) => {
                    if occupant.alliance() != piece.alliance() {
                        moves.push(Move::Capture {
                            piece: *piece,
                            destination: next,
                            captured: *occupant,
                        });
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}
