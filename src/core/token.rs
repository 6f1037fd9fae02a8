use super::error::{BoardError, Result};
use std::fmt;

/// A player marker: a single ASCII uppercase letter.
///
/// The enumerator only ever plays `X` and `O`, but the board accepts the
/// full A-Z alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u8);

impl Token {
    pub const X: Token = Token(b'X');
    pub const O: Token = Token(b'O');

    /// Validates that `c` is a single uppercase letter.
    pub fn new(c: char) -> Result<Token> {
        if c.is_ascii_uppercase() {
            Ok(Token(c as u8))
        } else {
            Err(BoardError::InvalidToken(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
