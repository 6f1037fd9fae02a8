use super::token::Token;

/// A single placement in a played-out game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub token: Token,
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// One complete simulated game: who won (`None` for a draw) and every
/// placement from first to last, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Option<Token>,
    pub moves: Vec<Move>,
}
