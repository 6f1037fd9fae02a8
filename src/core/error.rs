use thiserror::Error;

/// Failures surfaced by the board. All of them are programmer errors:
/// immediate, fatal, no recovery.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),

    #[error("coordinates x({x}) y({y}) z({z}) are outside a board of size {size}")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        size: usize,
    },

    #[error("cell x({x}) y({y}) z({z}) cannot be set")]
    IllegalMove { x: usize, y: usize, z: usize },

    #[error("token '{0}' is not a single uppercase letter")]
    InvalidToken(char),
}

pub type Result<T> = std::result::Result<T, BoardError>;
