use super::super::position::Board;
use super::super::{Coordinate, Move, Piece};
use super::step_move;

const CANDIDATE_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

fn is_first_column_exclusion(current: Coordinate, offset: i8) -> bool {
    current.is_first_column() && matches!(offset, -17 | -10 | 6 | 15)
}

fn is_second_column_exclusion(current: Coordinate, offset: i8) -> bool {
    current.is_second_column() && matches!(offset, -10 | 6)
}

fn is_seventh_column_exclusion(current: Coordinate, offset: i8) -> bool {
    current.is_seventh_column() && matches!(offset, -6 | 10)
}

fn is_eighth_column_exclusion(current: Coordinate, offset: i8) -> bool {
    current.is_eighth_column() && matches!(offset, -15 | -6 | 10 | 17)
}

pub(crate) fn generate_knight_moves(knight: &Piece, board: &Board) -> Vec<Move> {
    let from = knight.coordinate();
    CANDIDATE_OFFSETS
        .iter()
        .filter(|&&offset| {
            !(is_first_column_exclusion(from, offset)
                || is_second_column_exclusion(from, offset)
                || is_seventh_column_exclusion(from, offset)
                || is_eighth_column_exclusion(from, offset))
        })
        .filter_map(|&offset| from.offset(offset))
        .filter_map(|destination| step_move(knight, board, destination))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::board::{coord, Alliance, Move, Piece, PieceKind, Position};

    fn knight_position(at: &str) -> Position {
        Position::builder()
            .piece(Piece::new(PieceKind::King, coord("e1"), Alliance::White))
            .piece(Piece::new(PieceKind::King, coord("e8"), Alliance::Black))
            .piece(Piece::new(PieceKind::Knight, coord(at), Alliance::White))
            .build()
    }

    fn destinations(position: &Position, at: &str) -> Vec<String> {
        let knight = position.piece_at(coord(at)).copied().expect("knight expected");
        let mut names: Vec<String> = knight
            .pseudo_legal_moves(position)
            .iter()
            .map(|m| m.destination().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_knight_in_corner() {
        let position = knight_position("a1");
        assert_eq!(destinations(&position, "a1"), vec!["b3", "c2"]);
    }

    #[test]
    fn test_knight_on_b_file_does_not_wrap() {
        let position = knight_position("b4");
        assert_eq!(
            destinations(&position, "b4"),
            vec!["a2", "a6", "c2", "c6", "d3", "d5"]
        );
    }

    #[test]
    fn test_knight_on_g_and_h_files() {
        let position = knight_position("g5");
        assert_eq!(
            destinations(&position, "g5"),
            vec!["e4", "e6", "f3", "f7", "h3", "h7"]
        );

        let position = knight_position("h8");
        assert_eq!(destinations(&position, "h8"), vec!["f7", "g6"]);
    }

    #[test]
    fn test_knight_skips_own_and_captures_enemy() {
        let position = Position::builder()
            .piece(Piece::new(PieceKind::King, coord("e1"), Alliance::White))
            .piece(Piece::new(PieceKind::King, coord("e8"), Alliance::Black))
            .piece(Piece::new(PieceKind::Knight, coord("d4"), Alliance::White))
            .piece(Piece::new(PieceKind::Pawn, coord("e6"), Alliance::Black))
            .piece(Piece::new(PieceKind::Pawn, coord("c6"), Alliance::White))
            .build();
        let knight = position.piece_at(coord("d4")).copied().expect("knight expected");
        let moves = knight.pseudo_legal_moves(&position);

        assert_eq!(moves.len(), 7);
        assert!(moves
            .iter()
            .any(|m| matches!(m, Move::Capture { destination, .. } if *destination == coord("e6"))));
        assert!(!moves.iter().any(|m| m.destination() == coord("c6")));
    }
}
