use super::{Move, Position};

impl Position {
    /// Count the leaf nodes of the legal move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let player = self.current_player();
        let mut nodes = 0;
        for mv in player.moves() {
            let Some(next) = player.make_move(mv).into_position() else {
                continue;
            };
            nodes += if depth == 1 { 1 } else { next.perft(depth - 1) };
        }

        nodes
    }

    /// Perft split by root move, in move generation order.
    #[must_use]
    pub fn perft_divide(&self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let player = self.current_player();
        let mut divided = Vec::new();
        for mv in player.moves() {
            if let Some(next) = player.make_move(mv).into_position() {
                let nodes = next.perft(depth - 1);
                log::trace!("{}: {nodes}", mv.to_coordinate_string());
                divided.push((*mv, nodes));
            }
        }
        divided
    }
}
