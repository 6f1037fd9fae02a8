use crate::core::token::Token;
use crate::games::cubic::CubicBoard;

/// Renders the raw cell contents as text: one line per y, each line showing
/// that row of every z-layer side by side, empty cells as `_`.
pub fn draw_board(board: &CubicBoard) -> String {
    let size = board.size();

    (0..size)
        .map(|y| {
            (0..size)
                .map(|z| {
                    (0..size)
                        .map(|x| board.get(x, y, z).map_or('_', Token::as_char))
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("   ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_layers_side_by_side() {
        let mut board = CubicBoard::new(2).unwrap();
        board.set(Token::X, 0, 0, 0).unwrap();
        board.set(Token::O, 0, 0, 1).unwrap();
        board.set(Token::X, 1, 1, 0).unwrap();

        assert_eq!(draw_board(&board), "X_   O_\n_X   __");
    }

    #[test]
    fn renders_the_trivial_cube() {
        let board = CubicBoard::new(1).unwrap();
        assert_eq!(draw_board(&board), "_");
    }
}
