use clap::Parser;
use tictactoe3d::algos::enumerate::play_and_report;
use tictactoe3d::core::token::Token;
use tictactoe3d::format::draw_board;
use tictactoe3d::games::cubic::CubicBoard;

/// Exhaustively plays every gravity-constrained 3D tic-tac-toe game of the
/// chosen size and reports how they end.
#[derive(Parser)]
struct Cli {
    /// Edge length of the cubic board. The game tree explodes quickly:
    /// size 3 is already far beyond practical.
    #[arg(long, default_value_t = 2)]
    size: usize,
}

fn main() {
    let args = Cli::parse();

    let board = match CubicBoard::new(args.size) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let outcomes = play_and_report(&board, Token::X);

    let x_wins = outcomes
        .iter()
        .filter(|o| o.winner == Some(Token::X))
        .count();
    let o_wins = outcomes
        .iter()
        .filter(|o| o.winner == Some(Token::O))
        .count();
    let draws = outcomes.iter().filter(|o| o.winner.is_none()).count();

    println!("Played games: {}", outcomes.len());
    println!("X wins: {x_wins}");
    println!("O wins: {o_wins}");
    println!("Draws: {draws}");

    if let Some(sample) = outcomes.first() {
        let mut replay = CubicBoard::new(args.size).expect("size already validated");
        for m in &sample.moves {
            replay
                .set(m.token, m.x, m.y, m.z)
                .expect("recorded move no longer legal");
        }

        match sample.winner {
            Some(winner) => println!("\nSample game, won by {winner}:"),
            None => println!("\nSample game, drawn:"),
        }
        println!("{}", draw_board(&replay));
    }
}
