use crate::core::outcome::{GameOutcome, Move};
use crate::core::token::Token;
use crate::games::cubic::CubicBoard;

/// Plays every legal game to completion, alternating tokens starting with
/// `first_token`, and reports one outcome per finished game.
///
/// Games are move *sequences*: the same position reached through different
/// orders is explored again on purpose, so the result counts games, not
/// distinct states.
pub fn play_and_report(board: &CubicBoard, first_token: Token) -> Vec<GameOutcome> {
    let mut outcomes = Vec::new();
    let mut path = Vec::new();
    explore(board, first_token, &mut path, &mut outcomes);
    outcomes
}

fn explore(
    board: &CubicBoard,
    token: Token,
    path: &mut Vec<Move>,
    outcomes: &mut Vec<GameOutcome>,
) {
    let size = board.size();
    let mut any_fillable = false;

    for x in 0..size {
        for y in 0..size {
            for z in 0..size {
                if !board.is_fillable(x, y, z) {
                    continue;
                }
                any_fillable = true;

                let mut next = board.clone();
                next.set(token, x, y, z)
                    .expect("fillable cell rejected the move");

                path.push(Move { token, x, y, z });
                match next.winner() {
                    Some(winner) => outcomes.push(GameOutcome {
                        winner: Some(winner),
                        moves: path.clone(),
                    }),
                    None => explore(&next, opposite(token), path, outcomes),
                }
                path.pop();
            }
        }
    }

    // a board with no fillable cell is exhausted: the game is a draw
    if !any_fillable {
        outcomes.push(GameOutcome {
            winner: None,
            moves: path.clone(),
        });
    }
}

fn opposite(token: Token) -> Token {
    if token == Token::X {
        Token::O
    } else {
        Token::X
    }
}
