//! Per-alliance view of a position: legality, check status and move
//! application.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::CoordinateError;
use super::movegen::is_threatened;
use super::position::{Board, Side};
use super::{Alliance, Coordinate, Move, Piece, Position};

/// Outcome of asking a player to make a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    Done,
    /// The move is not in the player's move set.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}

/// Game state from one player's point of view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayerStatus {
    Normal,
    InCheck,
    Checkmate,
    Stalemate,
}

impl PlayerStatus {
    /// Checkmate and stalemate end the game.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, PlayerStatus::Checkmate | PlayerStatus::Stalemate)
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStatus::Normal => write!(f, "normal"),
            PlayerStatus::InCheck => write!(f, "in check"),
            PlayerStatus::Checkmate => write!(f, "checkmate"),
            PlayerStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// The result of a move attempt.
///
/// A rejected attempt hands back the very position it started from; the
/// candidate built while testing for self-check is dropped.
#[derive(Clone, Debug)]
pub struct MoveTransition<'a> {
    from: &'a Position,
    to: Option<Position>,
    attempted: Option<Move>,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    fn rejected(from: &'a Position, attempted: Option<Move>, status: MoveStatus) -> Self {
        MoveTransition {
            from,
            to: None,
            attempted,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// The position the move was attempted on.
    #[must_use]
    pub fn from_position(&self) -> &'a Position {
        self.from
    }

    /// The new position when the move was made, otherwise the original one.
    #[must_use]
    pub fn to_position(&self) -> &Position {
        self.to.as_ref().unwrap_or(self.from)
    }

    /// Take ownership of the new position. `None` when the move was rejected.
    #[must_use]
    pub fn into_position(self) -> Option<Position> {
        self.to
    }

    /// The move that was attempted, if one could be resolved.
    #[must_use]
    pub fn move_made(&self) -> Option<Move> {
        self.attempted
    }
}

/// One alliance's view of a [`Position`].
///
/// Cheap to copy: it is a borrowed position plus an alliance. The opponent is
/// found by asking the position for the other alliance's view.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    position: &'a Position,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(position: &'a Position, alliance: Alliance) -> Self {
        Player { position, alliance }
    }

    #[inline]
    fn side(&self) -> &'a Side {
        self.position.side(self.alliance)
    }

    #[inline]
    #[must_use]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &'a Position {
        self.position
    }

    #[must_use]
    pub fn opponent(&self) -> Player<'a> {
        self.position.player(self.alliance.opponent())
    }

    #[must_use]
    pub fn active_pieces(&self) -> &'a [Piece] {
        &self.side().pieces
    }

    #[must_use]
    pub fn king(&self) -> Piece {
        self.side().king
    }

    /// Pseudo-legal moves plus castles, before the self-check filter.
    #[must_use]
    pub fn moves(&self) -> &'a [Move] {
        &self.side().moves
    }

    pub fn castle_moves(&self) -> impl Iterator<Item = &'a Move> {
        self.moves().iter().filter(|m| m.is_castle())
    }

    #[must_use]
    pub fn is_move_possible(&self, mv: &Move) -> bool {
        self.moves().contains(mv)
    }

    /// Moves that survive the self-check filter.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.moves()
            .iter()
            .filter(|mv| self.make_move(mv).is_done())
            .copied()
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.side().in_check
    }

    /// Whether any move survives the self-check filter.
    #[must_use]
    pub fn has_escape_moves(&self) -> bool {
        self.moves().iter().any(|mv| self.make_move(mv).is_done())
    }

    #[must_use]
    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    #[must_use]
    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        match (self.is_in_check(), self.has_escape_moves()) {
            (true, true) => PlayerStatus::InCheck,
            (true, false) => PlayerStatus::Checkmate,
            (false, true) => PlayerStatus::Normal,
            (false, false) => PlayerStatus::Stalemate,
        }
    }

    /// Apply `mv` if it is one of this player's moves and does not leave the
    /// player's king attacked.
    #[must_use]
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_possible(mv) {
            log::debug!("{} rejected {}: not in move set", self.alliance, mv.to_coordinate_string());
            return MoveTransition::rejected(self.position, Some(*mv), MoveStatus::IllegalMove);
        }
        // Only reachable when the opponent was left in check.
        if mv.captured_piece().is_some_and(|piece| piece.is_king()) {
            log::debug!("{} rejected {}: captures a king", self.alliance, mv.to_coordinate_string());
            return MoveTransition::rejected(self.position, Some(*mv), MoveStatus::IllegalMove);
        }

        let candidate = mv.execute(self.position);
        if candidate.side(self.alliance).in_check {
            log::debug!("{} rejected {}: king left in check", self.alliance, mv.to_coordinate_string());
            return MoveTransition::rejected(
                self.position,
                Some(*mv),
                MoveStatus::LeavesPlayerInCheck,
            );
        }

        log::trace!("{} played {mv}", self.alliance);
        MoveTransition {
            from: self.position,
            to: Some(candidate),
            attempted: Some(*mv),
            status: MoveStatus::Done,
        }
    }

    /// This player's move between two coordinates, if there is one.
    #[must_use]
    pub fn find_move(&self, origin: Coordinate, destination: Coordinate) -> Option<Move> {
        self.moves()
            .iter()
            .find(|m| m.origin() == origin && m.destination() == destination)
            .copied()
    }

    /// Resolve and apply the move between two coordinates.
    #[must_use]
    pub fn make_move_between(&self, origin: Coordinate, destination: Coordinate) -> MoveTransition<'a> {
        match self.find_move(origin, destination) {
            Some(mv) => self.make_move(&mv),
            None => {
                log::debug!("{} rejected {origin}{destination}: no such move", self.alliance);
                MoveTransition::rejected(self.position, None, MoveStatus::IllegalMove)
            }
        }
    }

    /// Like [`Self::make_move_between`], taking square names such as `"e2"`.
    pub fn make_move_from_notation(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<MoveTransition<'a>, CoordinateError> {
        let origin = Coordinate::from_notation(origin)?;
        let destination = Coordinate::from_notation(destination)?;
        Ok(self.make_move_between(origin, destination))
    }
}

struct CastleWing {
    kingside: bool,
    king_destination: usize,
    rook_home: usize,
    /// Also the square the king passes over.
    rook_destination: usize,
    between: &'static [usize],
}

const WHITE_KING_HOME: usize = 60;
const BLACK_KING_HOME: usize = 4;

const WHITE_WINGS: [CastleWing; 2] = [
    CastleWing {
        kingside: true,
        king_destination: 62,
        rook_home: 63,
        rook_destination: 61,
        between: &[61, 62],
    },
    CastleWing {
        kingside: false,
        king_destination: 58,
        rook_home: 56,
        rook_destination: 59,
        between: &[57, 58, 59],
    },
];

const BLACK_WINGS: [CastleWing; 2] = [
    CastleWing {
        kingside: true,
        king_destination: 6,
        rook_home: 7,
        rook_destination: 5,
        between: &[5, 6],
    },
    CastleWing {
        kingside: false,
        king_destination: 2,
        rook_home: 0,
        rook_destination: 3,
        between: &[1, 2, 3],
    },
];

/// Castling moves available to `king`, given the opponent's pseudo-legal
/// moves and pieces on `board`.
pub(crate) fn calculate_king_castles(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[Move],
    opponent_pieces: &[Piece],
) -> Vec<Move> {
    let (home, wings) = match king.alliance() {
        Alliance::White => (WHITE_KING_HOME, &WHITE_WINGS),
        Alliance::Black => (BLACK_KING_HOME, &BLACK_WINGS),
    };
    if king.has_moved() || king.coordinate().index() != home || in_check {
        return Vec::new();
    }

    wings
        .iter()
        .filter_map(|wing| {
            let empty_between = wing
                .between
                .iter()
                .all(|&idx| board.piece_at(Coordinate::from_index(idx)).is_none());
            if !empty_between {
                return None;
            }

            let rook = *board.piece_at(Coordinate::from_index(wing.rook_home))?;
            if !rook.is_rook() || rook.alliance() != king.alliance() || rook.has_moved() {
                return None;
            }

            let transit = Coordinate::from_index(wing.rook_destination);
            let destination = Coordinate::from_index(wing.king_destination);
            if is_threatened(transit, opponent_moves, opponent_pieces)
                || is_threatened(destination, opponent_moves, opponent_pieces)
            {
                return None;
            }

            let castle = if wing.kingside {
                Move::KingSideCastle {
                    king: *king,
                    destination,
                    rook,
                    rook_destination: transit,
                }
            } else {
                Move::QueenSideCastle {
                    king: *king,
                    destination,
                    rook,
                    rook_destination: transit,
                }
            };
            Some(castle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{coord, PieceKind};

    fn castling_position() -> Position {
        Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
    }

    #[test]
    fn test_both_wings_available() {
        let position = castling_position();
        for player in [position.white_player(), position.black_player()] {
            let castles: Vec<_> = player.castle_moves().collect();
            assert_eq!(castles.len(), 2, "{} castles", player.alliance());
        }
        let white = position.white_player();
        assert!(white.find_move(coord("e1"), coord("g1")).is_some());
        assert!(white.find_move(coord("e1"), coord("c1")).is_some());
    }

    #[test]
    fn test_castle_moves_rook() {
        let position = castling_position();
        let transition = position.white_player().make_move_between(coord("e1"), coord("c1"));
        assert_eq!(transition.status(), MoveStatus::Done);
        let after = transition.to_position();

        let king = after.piece_at(coord("c1")).copied().expect("king on c1");
        let rook = after.piece_at(coord("d1")).copied().expect("rook on d1");
        assert_eq!(king.kind(), PieceKind::King);
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert!(king.has_moved() && rook.has_moved());
        assert!(after.piece_at(coord("a1")).is_none());
        assert!(after.piece_at(coord("e1")).is_none());
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked() {
        // The rook on b8 covers b1, which the king never crosses.
        let position = Position::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(position.white_player().find_move(coord("e1"), coord("c1")).is_some());
    }

    #[test]
    fn test_transit_square_attacked_by_pawn() {
        let position = Position::from_fen("4k3/8/8/8/8/8/6p1/4K2R w K - 0 1");
        assert_eq!(position.white_player().castle_moves().count(), 0);
    }

    #[test]
    fn test_rejection_returns_same_position() {
        let position = Position::standard();
        let player = position.current_player();
        let transition = player.make_move_between(coord("e2"), coord("e5"));
        assert_eq!(transition.status(), MoveStatus::IllegalMove);
        assert!(std::ptr::eq(transition.to_position(), &position));
        assert!(transition.move_made().is_none());
        assert!(transition.into_position().is_none());
    }

    #[test]
    fn test_notation_errors_surface() {
        let position = Position::standard();
        let err = position
            .current_player()
            .make_move_from_notation("e2", "e9")
            .expect_err("e9 is not a square");
        assert_eq!(
            err,
            CoordinateError::InvalidNotation {
                notation: "e9".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_turn_king_capture_is_rejected() {
        // White to move while Black's king is already attacked.
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1");
        let white = position.white_player();
        let capture = white
            .find_move(coord("e1"), coord("e8"))
            .expect("rook attacks the king");
        assert_eq!(white.make_move(&capture).status(), MoveStatus::IllegalMove);
        assert!(!white.legal_moves().contains(&capture));
    }

    #[test]
    fn test_status_labels() {
        assert!(PlayerStatus::Checkmate.is_terminal());
        assert!(!PlayerStatus::InCheck.is_terminal());
        assert_eq!(MoveStatus::LeavesPlayerInCheck.to_string(), "leaves player in check");
    }
}
