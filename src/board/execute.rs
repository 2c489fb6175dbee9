//! Applying a move to produce the next position.

use super::{Move, Position, PositionBuilder};

impl Move {
    /// Build the position that results from playing this move on `position`.
    ///
    /// `position` is left untouched. No legality check happens here; that is
    /// [`crate::board::Player::make_move`]'s job.
    ///
    /// # Panics
    ///
    /// Panics if the move captures a king, which only happens when it is
    /// played from a position where the side not to move is already in check.
    /// Debug builds also panic when the moving piece is not standing on the
    /// move's origin in `position`.
    #[must_use]
    pub fn execute(&self, position: &Position) -> Position {
        let mover = self.moved_piece();
        debug_assert!(
            position.piece_at(self.origin()) == Some(&mover),
            "{} does not belong to this position: no {:?} on {}",
            self.to_coordinate_string(),
            mover.kind(),
            self.origin(),
        );
        let vacated = [
            Some(self.origin()),
            self.captured_piece().map(|piece| piece.coordinate()),
            self.castle_rook().map(|rook| rook.coordinate()),
        ];

        let mut builder = PositionBuilder::new();
        for piece in position.all_pieces() {
            if !vacated.contains(&Some(piece.coordinate())) {
                builder = builder.piece(*piece);
            }
        }

        // Promotions come out of resulting_piece as a queen.
        let landed = self.resulting_piece();
        builder = builder.piece(landed);

        if let Move::KingSideCastle {
            rook,
            rook_destination,
            ..
        }
        | Move::QueenSideCastle {
            rook,
            rook_destination,
            ..
        } = *self
        {
            builder = builder.piece(rook.moved_to(rook_destination));
        }

        builder = builder.side_to_move(mover.alliance().opponent());
        if self.is_pawn_jump() {
            builder = builder.en_passant(landed);
        }
        builder.build()
    }
}
