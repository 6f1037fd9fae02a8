use tictactoe3d::algos::enumerate::play_and_report;
use tictactoe3d::core::token::Token;
use tictactoe3d::games::cubic::CubicBoard;

#[test]
fn trivial_cube_is_won_by_the_first_move() {
    let board = CubicBoard::new(1).unwrap();
    let outcomes = play_and_report(&board, Token::X);

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].winner, Some(Token::X));
    assert_eq!(outcomes[0].moves.len(), 1);

    let only = outcomes[0].moves[0];
    assert_eq!((only.token, only.x, only.y, only.z), (Token::X, 0, 0, 0));
}

#[test]
fn two_cube_always_falls_to_x_on_move_three() {
    // any two distinct cells of the 2-cube are collinear, so X's second
    // placement always completes a line: 4 openings, 4 replies, and 4
    // finishing cells (3 when O stacked on top of X) gives 4 * 15 games
    let board = CubicBoard::new(2).unwrap();
    let outcomes = play_and_report(&board, Token::X);

    assert_eq!(outcomes.len(), 60);
    for outcome in &outcomes {
        assert_eq!(outcome.winner, Some(Token::X));
        assert_eq!(outcome.moves.len(), 3);

        let tokens: Vec<Token> = outcome.moves.iter().map(|m| m.token).collect();
        assert_eq!(tokens, vec![Token::X, Token::O, Token::X]);
    }
}

#[test]
fn winner_made_the_last_move() {
    let board = CubicBoard::new(2).unwrap();
    for outcome in play_and_report(&board, Token::O) {
        let last = outcome.moves.last().expect("every game has moves");
        assert_eq!(outcome.winner, Some(last.token));
    }
}

#[test]
fn every_reported_move_sequence_is_legal() {
    let board = CubicBoard::new(2).unwrap();
    for outcome in play_and_report(&board, Token::X) {
        let mut replay = CubicBoard::new(2).unwrap();
        for m in &outcome.moves {
            assert!(replay.is_fillable(m.x, m.y, m.z));
            replay.set(m.token, m.x, m.y, m.z).unwrap();
        }
        assert_eq!(replay.winner(), outcome.winner);
    }
}

#[test]
fn enumeration_order_is_deterministic() {
    let board = CubicBoard::new(2).unwrap();
    assert_eq!(
        play_and_report(&board, Token::X),
        play_and_report(&board, Token::X)
    );
}

#[test]
fn exhausted_board_reports_a_single_drawn_game() {
    let mut board = CubicBoard::new(1).unwrap();
    board.set(Token::O, 0, 0, 0).unwrap();

    // nothing is fillable, so the only "game" is the empty one and no
    // winning move is ever made during it
    let outcomes = play_and_report(&board, Token::X);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].winner, None);
    assert!(outcomes[0].moves.is_empty());
}

#[test]
fn enumeration_leaves_the_input_board_untouched() {
    let board = CubicBoard::new(2).unwrap();
    play_and_report(&board, Token::X);

    for x in 0..2 {
        for y in 0..2 {
            for z in 0..2 {
                assert_eq!(board.get(x, y, z), None);
            }
        }
    }
}
