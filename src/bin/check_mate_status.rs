use std::env;
use std::process::ExitCode;

use chess_rules::board::Position;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        eprintln!("       moves are origin and destination squares, e.g. e2e4");
        return ExitCode::FAILURE;
    }

    let mut position = Position::standard();
    for mv in args.iter().skip(1) {
        if mv.len() < 4 || !mv.is_char_boundary(2) {
            eprintln!("malformed move '{mv}'");
            return ExitCode::FAILURE;
        }
        let (from, to) = mv.split_at(2);
        let to = to.get(..2).unwrap_or(to);
        let transition = match position.current_player().make_move_from_notation(from, to) {
            Ok(transition) => transition,
            Err(err) => {
                eprintln!("{mv}: {err}");
                return ExitCode::FAILURE;
            }
        };
        let status = transition.status();
        match transition.into_position() {
            Some(next) => position = next,
            None => {
                eprintln!("{mv}: {status}");
                return ExitCode::FAILURE;
            }
        }
    }

    let player = position.current_player();
    let legal_moves = player.legal_moves();
    println!("{position}");
    println!("fen: {}", position.to_fen());
    println!("side_to_move: {}", player.alliance());
    println!("status: {}", player.status());
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", player.is_in_checkmate());
    println!("stalemate: {}", player.is_in_stalemate());
    for mv in &legal_moves {
        println!("{} ({mv})", mv.to_coordinate_string());
    }
    ExitCode::SUCCESS
}
