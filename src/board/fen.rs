use std::str::FromStr;

use super::error::FenError;
use super::{
    Alliance, Coordinate, Piece, PieceKind, Position, PositionBuilder, NUM_SQUARES,
    SQUARES_PER_ROW,
};

/// King and rook squares each castling letter vouches for.
static CASTLING_HOMES: [(char, [&str; 2]); 4] = [
    ('K', ["e1", "h1"]),
    ('Q', ["e1", "a1"]),
    ('k', ["e8", "h8"]),
    ('q', ["e8", "a8"]),
];

fn castling_homes(letter: char) -> impl Iterator<Item = Coordinate> {
    CASTLING_HOMES
        .iter()
        .filter(move |(c, _)| *c == letter)
        .flat_map(|(_, squares)| squares.iter())
        .filter_map(|name| Coordinate::from_notation(name).ok())
}

/// FEN carries no moved flags, so they are inferred from the board: kings and
/// rooks count as unmoved only when a castling right names their square,
/// pawns only on their start rank. Other pieces are treated as unmoved.
fn infer_moved(kind: PieceKind, at: Coordinate, alliance: Alliance, unmoved: &[Coordinate]) -> bool {
    match kind {
        PieceKind::King | PieceKind::Rook => !unmoved.contains(&at),
        PieceKind::Pawn => at.rank() != alliance.pawn_start_rank(),
        _ => false,
    }
}

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are accepted but ignored.
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse castling rights first, they decide the king and rook flags
        let mut unmoved = Vec::new();
        for c in parts[2].chars() {
            match c {
                'K' | 'Q' | 'k' | 'q' => unmoved.extend(castling_homes(c)),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // Parse piece placement
        let mut placements: [Option<(PieceKind, Alliance)>; NUM_SQUARES] = [None; NUM_SQUARES];
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= SQUARES_PER_ROW {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let alliance = if c.is_uppercase() {
                        Alliance::White
                    } else {
                        Alliance::Black
                    };
                    let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= SQUARES_PER_ROW {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    placements[rank_idx * SQUARES_PER_ROW + file] = Some((kind, alliance));
                    file += 1;
                }
            }
            if file > SQUARES_PER_ROW {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Parse side to move
        let side_to_move = match parts[1] {
            "w" => Alliance::White,
            "b" => Alliance::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut builder = PositionBuilder::new();
        for at in Coordinate::all() {
            if let Some((kind, alliance)) = placements[at.index()] {
                let moved = infer_moved(kind, at, alliance, &unmoved);
                builder = builder.piece(Piece::with_moved(kind, at, alliance, moved));
            }
        }

        // The en passant square names the square behind the pawn that jumped
        if parts[3] != "-" {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target = Coordinate::from_notation(parts[3]).map_err(|_| invalid())?;
            let jumped = side_to_move.opponent();
            let pawn = target
                .offset(SQUARES_PER_ROW as i8 * jumped.direction())
                .and_then(|at| placements[at.index()].map(|(kind, alliance)| (at, kind, alliance)))
                .filter(|&(_, kind, alliance)| kind == PieceKind::Pawn && alliance == jumped)
                .map(|(at, _, _)| Piece::with_moved(PieceKind::Pawn, at, jumped, true))
                .ok_or_else(invalid)?;
            builder = builder.en_passant(pawn);
        }

        builder
            .side_to_move(side_to_move)
            .try_build()
            .map_err(FenError::from)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(position) => position,
            Err(err) => panic!("Invalid FEN string: {err}"),
        }
    }

    /// Convert the position to FEN notation.
    ///
    /// Castling letters are emitted for every unmoved king and rook pair still
    /// on their home squares. The clocks are not tracked and always read
    /// `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (1..=SQUARES_PER_ROW).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..SQUARES_PER_ROW {
                let piece = Coordinate::from_file_rank(file, rank).and_then(|at| self.piece_at(at));
                if let Some(piece) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.symbol());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move() {
            Alliance::White => "w",
            Alliance::Black => "b",
        };

        let mut castling = String::new();
        for &(letter, _) in CASTLING_HOMES.iter() {
            let alliance = if letter.is_uppercase() {
                Alliance::White
            } else {
                Alliance::Black
            };
            let unmoved = |at: Coordinate, is: fn(&Piece) -> bool| {
                self.piece_at(at)
                    .is_some_and(|p| is(p) && p.alliance() == alliance && !p.has_moved())
            };
            let mut homes = castling_homes(letter);
            if let (Some(king_at), Some(rook_at)) = (homes.next(), homes.next()) {
                if unmoved(king_at, Piece::is_king) && unmoved(rook_at, Piece::is_rook) {
                    castling.push(letter);
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_pawn()
            .and_then(|pawn| {
                pawn.coordinate()
                    .offset(-(SQUARES_PER_ROW as i8) * pawn.alliance().direction())
            })
            .map_or_else(|| "-".to_string(), |at| at.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{coord, PositionError};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_fen_matches_standard() {
        let parsed = Position::from_fen(START);
        assert_eq!(parsed, Position::standard());
        assert_eq!(Position::standard().to_fen(), START);
    }

    #[test]
    fn test_fen_round_trip() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1",
        ];
        for fen in fens {
            assert_eq!(Position::from_fen(fen).to_fen(), fen);
        }
    }

    #[test]
    fn test_moved_flags_inferred() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/4P3/R3K2R w Kq - 0 1");
        let flag = |at: &str| position.piece_at(coord(at)).map(|p| p.has_moved());
        assert_eq!(flag("e1"), Some(false));
        assert_eq!(flag("h1"), Some(false));
        assert_eq!(flag("a1"), Some(true));
        assert_eq!(flag("a8"), Some(false));
        assert_eq!(flag("h8"), Some(true));
        assert_eq!(flag("e2"), Some(false));
    }

    #[test]
    fn test_en_passant_pawn_located() {
        let position =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 2");
        let pawn = position.en_passant_pawn().expect("en passant pawn");
        assert_eq!(pawn.coordinate(), coord("d4"));
        assert_eq!(pawn.alliance(), Alliance::White);
    }

    #[test]
    fn test_invalid_fens() {
        assert_eq!(
            Position::try_from_fen("8/8/8/8"),
            Err(FenError::TooFewParts { found: 1 })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4X3 w - -"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - -"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w Z -"),
            Err(FenError::InvalidCastling { char: 'Z' })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w - e3"),
            Err(FenError::InvalidEnPassant {
                found: "e3".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K4 w - -"),
            Err(FenError::TooManyFiles { rank: 7, files: 9 })
        );
    }

    #[test]
    fn test_fen_without_king() {
        let err = Position::try_from_fen("8/8/8/8/8/8/8/4K3 w - -").unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidPosition {
                reason: PositionError::MissingKing {
                    alliance: Alliance::Black
                }
            }
        );
    }

    #[test]
    fn test_from_str() {
        let position: Position = START.parse().expect("valid FEN");
        assert_eq!(position.current_player().legal_moves().len(), 20);
    }
}
