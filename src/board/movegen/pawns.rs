use super::super::position::Board;
use super::super::{Coordinate, Move, Piece};

const FORWARD: i8 = 8;
const JUMP: i8 = 16;
const DIAGONALS: [i8; 2] = [7, 9];

/// Whether the diagonal `delta` (already scaled by direction) wraps off the
/// board from `from`. Deltas of -9 and +7 step one file left, -7 and +9 one
/// file right.
fn is_diagonal_excluded(from: Coordinate, delta: i8) -> bool {
    match delta {
        -9 | 7 => from.is_first_column(),
        -7 | 9 => from.is_eighth_column(),
        _ => false,
    }
}

fn advance(pawn: &Piece, destination: Coordinate) -> Move {
    if pawn.alliance().is_promotion_square(destination) {
        Move::Promotion {
            pawn: *pawn,
            destination,
            captured: None,
        }
    } else {
        Move::Quiet {
            piece: *pawn,
            destination,
        }
    }
}

fn capture(pawn: &Piece, destination: Coordinate, captured: Piece) -> Move {
    if pawn.alliance().is_promotion_square(destination) {
        Move::Promotion {
            pawn: *pawn,
            destination,
            captured: Some(captured),
        }
    } else {
        Move::Capture {
            piece: *pawn,
            destination,
            captured,
        }
    }
}

pub(crate) fn generate_pawn_moves(pawn: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    let from = pawn.coordinate();
    let alliance = pawn.alliance();
    let direction = alliance.direction();

    if let Some(forward) = from.offset(FORWARD * direction) {
        if board.piece_at(forward).is_none() {
            moves.push(advance(pawn, forward));

            let on_start_rank = from.rank() == alliance.pawn_start_rank();
            if !pawn.has_moved() && on_start_rank {
                if let Some(jump) = from.offset(JUMP * direction) {
                    if board.piece_at(jump).is_none() {
                        moves.push(Move::PawnJump {
                            pawn: *pawn,
                            destination: jump,
                        });
                    }
                }
            }
        }
    }

    for offset in DIAGONALS {
        let delta = offset * direction;
        if is_diagonal_excluded(from, delta) {
            continue;
        }
        let Some(destination) = from.offset(delta) else {
            continue;
        };

        match board.piece_at(destination) {
            Some(occupant) if occupant.alliance() != alliance => {
                moves.push(capture(pawn, destination, *occupant));
            }
            Some(_) => {}
            None => {
                // The passed pawn sits beside us, one file over on our rank.
                let beside = from.offset(delta - FORWARD * direction);
                if let Some(passed) = board.en_passant_pawn() {
                    if passed.alliance() != alliance && Some(passed.coordinate()) == beside {
                        moves.push(Move::EnPassant {
                            pawn: *pawn,
                            destination,
                            captured: passed,
                        });
                    }
                }
            }
        }
    }

    moves
}

/// The squares a pawn attacks diagonally, whether or not they are occupied.
pub(crate) fn attack_coordinates(pawn: &Piece) -> impl Iterator<Item = Coordinate> + '_ {
    let direction = pawn.alliance().direction();
    DIAGONALS.into_iter().filter_map(move |offset| {
        let delta = offset * direction;
        if is_diagonal_excluded(pawn.coordinate(), delta) {
            None
        } else {
            pawn.coordinate().offset(delta)
        }
    })
}
