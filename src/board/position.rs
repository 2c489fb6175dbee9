//! Immutable position snapshots.

use std::fmt;

use super::builder::PositionBuilder;
use super::error::PositionError;
use super::movegen::{attacks_on, generate_pseudo_moves, is_threatened};
use super::player::{calculate_king_castles, Player};
use super::{Alliance, Coordinate, Move, Piece, Square, NUM_SQUARES, SQUARES_PER_ROW};

/// The squares plus the en passant pawn: everything piece move generation
/// looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Board {
    squares: [Square; NUM_SQUARES],
    en_passant_pawn: Option<Piece>,
}

impl Board {
    #[inline]
    pub(crate) fn square(&self, coordinate: Coordinate) -> &Square {
        &self.squares[coordinate.index()]
    }

    #[inline]
    pub(crate) fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.square(coordinate).piece()
    }

    #[inline]
    pub(crate) fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    fn active_pieces(&self, alliance: Alliance) -> Vec<Piece> {
        self.squares
            .iter()
            .filter_map(Square::piece)
            .filter(|piece| piece.alliance() == alliance)
            .copied()
            .collect()
    }
}

/// Everything derived for one alliance when a position is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Side {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) king: Piece,
    /// Pseudo-legal piece moves followed by any castling moves.
    pub(crate) moves: Vec<Move>,
    pub(crate) in_check: bool,
}

fn establish_king(alliance: Alliance, pieces: &[Piece]) -> Result<Piece, PositionError> {
    let mut kings = pieces.iter().filter(|piece| piece.is_king());
    match (kings.next(), kings.count()) {
        (Some(king), 0) => Ok(*king),
        (Some(_), extra) => Err(PositionError::MultipleKings {
            alliance,
            found: extra + 1,
        }),
        (None, _) => Err(PositionError::MissingKing { alliance }),
    }
}

/// A frozen chess position.
///
/// Built through [`PositionBuilder`] or [`Position::standard`] and never
/// mutated afterwards. Applying a move always produces a new `Position`, so a
/// position can be shared freely, including across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Alliance,
    sides: [Side; 2],
}

impl Position {
    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> PositionBuilder {
        PositionBuilder::new()
    }

    /// The standard opening array with White to move.
    #[must_use]
    pub fn standard() -> Position {
        PositionBuilder::starting_position().build()
    }

    /// Materialise the squares, check the invariants and derive both sides.
    pub(crate) fn assemble(
        placements: [Option<Piece>; NUM_SQUARES],
        side_to_move: Alliance,
        en_passant_pawn: Option<Piece>,
    ) -> Result<Position, PositionError> {
        if let Some(pawn) = en_passant_pawn {
            let on_board = placements[pawn.coordinate().index()] == Some(pawn);
            if !pawn.is_pawn() || pawn.alliance() == side_to_move || !on_board {
                return Err(PositionError::InvalidEnPassant {
                    notation: pawn.coordinate().to_string(),
                });
            }
        }

        let board = Board {
            squares: std::array::from_fn(|idx| {
                Square::create(Coordinate::from_index(idx), placements[idx])
            }),
            en_passant_pawn,
        };

        let pieces = Alliance::BOTH.map(|alliance| board.active_pieces(alliance));
        let kings = [
            establish_king(Alliance::White, &pieces[0])?,
            establish_king(Alliance::Black, &pieces[1])?,
        ];
        let pseudo = [
            generate_pseudo_moves(&pieces[0], &board),
            generate_pseudo_moves(&pieces[1], &board),
        ];

        let in_check = Alliance::BOTH.map(|alliance| {
            let king = kings[alliance.index()];
            let opponent_moves = &pseudo[alliance.opponent().index()];
            attacks_on(king.coordinate(), opponent_moves).next().is_some()
        });
        let castles = Alliance::BOTH.map(|alliance| {
            let own = alliance.index();
            let opponent = alliance.opponent().index();
            calculate_king_castles(
                &board,
                &kings[own],
                in_check[own],
                &pseudo[opponent],
                &pieces[opponent],
            )
        });

        let [white_pieces, black_pieces] = pieces;
        let [mut white_moves, mut black_moves] = pseudo;
        let [white_castles, black_castles] = castles;
        white_moves.extend(white_castles);
        black_moves.extend(black_castles);

        let sides = [
            Side {
                pieces: white_pieces,
                king: kings[0],
                moves: white_moves,
                in_check: in_check[0],
            },
            Side {
                pieces: black_pieces,
                king: kings[1],
                moves: black_moves,
                in_check: in_check[1],
            },
        ];

        Ok(Position {
            board,
            side_to_move,
            sides,
        })
    }

    #[inline]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub(crate) fn side(&self, alliance: Alliance) -> &Side {
        &self.sides[alliance.index()]
    }

    /// The square at `coordinate`.
    #[inline]
    #[must_use]
    pub fn square(&self, coordinate: Coordinate) -> &Square {
        self.board.square(coordinate)
    }

    /// The piece on `coordinate`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.board.piece_at(coordinate)
    }

    /// All 64 squares in index order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        Coordinate::all().map(move |c| self.board.square(c))
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    /// The pawn that may be captured en passant this turn.
    #[inline]
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.board.en_passant_pawn()
    }

    /// Pieces of one alliance in coordinate order.
    #[must_use]
    pub fn pieces(&self, alliance: Alliance) -> &[Piece] {
        &self.side(alliance).pieces
    }

    /// Every piece on the board, White first.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.sides.iter().flat_map(|side| side.pieces.iter())
    }

    #[must_use]
    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    #[must_use]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    #[must_use]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    /// Both sides' pseudo-legal and castling moves, White first.
    pub fn all_pseudo_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.sides.iter().flat_map(|side| side.moves.iter())
    }

    /// Resolve an origin/destination pair against both sides' moves.
    #[must_use]
    pub fn find_move(&self, origin: Coordinate, destination: Coordinate) -> Option<Move> {
        self.all_pseudo_legal_moves()
            .find(|m| m.origin() == origin && m.destination() == destination)
            .copied()
    }

    /// Whether `by` could capture a piece standing on `coordinate`.
    ///
    /// Pawn diagonals count even when the square is empty; pawn advances and
    /// castles never do.
    #[must_use]
    pub fn is_attacked(&self, coordinate: Coordinate, by: Alliance) -> bool {
        let side = self.side(by);
        is_threatened(coordinate, &side.moves, &side.pieces)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, square) in self.squares().enumerate() {
            write!(f, "{:>3}", square.to_string())?;
            if (idx + 1) % SQUARES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{coord, PieceKind};

    #[test]
    fn test_standard_position_layout() {
        let position = Position::standard();
        assert_eq!(position.side_to_move(), Alliance::White);
        assert_eq!(position.pieces(Alliance::White).len(), 16);
        assert_eq!(position.pieces(Alliance::Black).len(), 16);
        assert_eq!(position.en_passant_pawn(), None);

        let king = position.piece_at(coord("e1")).copied().expect("white king");
        assert_eq!(king.kind(), PieceKind::King);
        assert_eq!(king.alliance(), Alliance::White);
        let queen = position.piece_at(coord("d8")).copied().expect("black queen");
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert!(position.piece_at(coord("e4")).is_none());
    }

    #[test]
    fn test_print_form() {
        let expected = concat!(
            "  r  n  b  q  k  b  n  r\n",
            "  p  p  p  p  p  p  p  p\n",
            "  -  -  -  -  -  -  -  -\n",
            "  -  -  -  -  -  -  -  -\n",
            "  -  -  -  -  -  -  -  -\n",
            "  -  -  -  -  -  -  -  -\n",
            "  P  P  P  P  P  P  P  P\n",
            "  R  N  B  Q  K  B  N  R\n",
        );
        assert_eq!(Position::standard().to_string(), expected);
    }

    #[test]
    fn test_pieces_agree_with_squares() {
        let position = Position::standard();
        for piece in position.all_pieces() {
            assert_eq!(position.piece_at(piece.coordinate()), Some(piece));
        }
        let occupied = position.squares().filter(|s| s.is_occupied()).count();
        assert_eq!(occupied, position.all_pieces().count());
    }

    #[test]
    fn test_pseudo_legal_moves_both_sides() {
        let position = Position::standard();
        assert_eq!(position.all_pseudo_legal_moves().count(), 40);
        let mv = position.find_move(coord("g8"), coord("f6")).expect("black knight move");
        assert_eq!(mv.moved_piece().alliance(), Alliance::Black);
        assert!(position.find_move(coord("e2"), coord("e5")).is_none());
    }

    #[test]
    fn test_is_attacked() {
        let position = Position::standard();
        assert!(position.is_attacked(coord("f3"), Alliance::White));
        assert!(position.is_attacked(coord("d6"), Alliance::Black));
        // Pawn pushes do not attack.
        assert!(!position.is_attacked(coord("e4"), Alliance::White));
        assert!(!position.is_attacked(coord("e5"), Alliance::Black));
    }

    #[test]
    fn test_missing_king_is_rejected() {
        let result = Position::builder()
            .piece(Piece::new(PieceKind::King, coord("e1"), Alliance::White))
            .try_build();
        assert_eq!(
            result,
            Err(PositionError::MissingKing {
                alliance: Alliance::Black
            })
        );
    }

    #[test]
    fn test_two_kings_are_rejected() {
        let result = Position::builder()
            .piece(Piece::new(PieceKind::King, coord("e1"), Alliance::White))
            .piece(Piece::new(PieceKind::King, coord("a1"), Alliance::White))
            .piece(Piece::new(PieceKind::King, coord("e8"), Alliance::Black))
            .try_build();
        assert_eq!(
            result,
            Err(PositionError::MultipleKings {
                alliance: Alliance::White,
                found: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "has no king")]
    fn test_build_panics_on_invariant_violation() {
        let _ = Position::builder()
            .piece(Piece::new(PieceKind::King, coord("e8"), Alliance::Black))
            .build();
    }

    #[test]
    fn test_en_passant_pawn_must_belong_to_side_not_to_move() {
        let pawn = Piece::with_moved(PieceKind::Pawn, coord("e4"), Alliance::White, true);
        let result = Position::builder()
            .piece(Piece::new(PieceKind::King, coord("e1"), Alliance::White))
            .piece(Piece::new(PieceKind::King, coord("e8"), Alliance::Black))
            .piece(pawn)
            .en_passant(pawn)
            .side_to_move(Alliance::White)
            .try_build();
        assert!(matches!(result, Err(PositionError::InvalidEnPassant { .. })));
    }
}
