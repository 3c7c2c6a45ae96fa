//! Player tokens and board cells.
//!
//! ## Token
//!
//! A non-zero `u8` identifying the player who placed a piece. Zero is
//! reserved for the empty cell in raw row-matrix encodings.
//!
//! ## Cell
//!
//! `Option<Token>`: `None` is empty. Thanks to the `NonZeroU8` niche a
//! cell is a single byte.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// Player token (non-zero identifier).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token(NonZeroU8);

/// A board cell: empty or holding a token.
pub type Cell = Option<Token>;

impl Token {
    /// Create a token from a raw id. Returns `None` for 0.
    ///
    /// ```
    /// use connect_k::core::Token;
    ///
    /// assert_eq!(Token::new(2).map(Token::raw), Some(2));
    /// assert!(Token::new(0).is_none());
    /// ```
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        match NonZeroU8::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Get the raw id (never 0).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0.get()
    }

    /// Build a token list from raw ids, rejecting 0.
    pub fn from_raw_ids(ids: &[u8]) -> Option<Vec<Token>> {
        ids.iter().map(|&id| Token::new(id)).collect()
    }

    /// Encode a cell as its raw id (0 for empty).
    #[must_use]
    pub fn encode_cell(cell: Cell) -> u8 {
        cell.map_or(0, Token::raw)
    }

    /// Decode a raw id into a cell (0 is empty).
    #[must_use]
    pub fn decode_cell(raw: u8) -> Cell {
        Token::new(raw)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_basics() {
        let t = Token::new(7).unwrap();
        assert_eq!(t.raw(), 7);
        assert_eq!(format!("{}", t), "7");
        assert!(Token::new(0).is_none());
    }

    #[test]
    fn test_cell_is_one_byte() {
        assert_eq!(std::mem::size_of::<Cell>(), 1);
    }

    #[test]
    fn test_cell_encoding() {
        let t = Token::new(3).unwrap();
        assert_eq!(Token::encode_cell(Some(t)), 3);
        assert_eq!(Token::encode_cell(None), 0);
        assert_eq!(Token::decode_cell(3), Some(t));
        assert_eq!(Token::decode_cell(0), None);
    }

    #[test]
    fn test_from_raw_ids() {
        let tokens = Token::from_raw_ids(&[1, 2, 3]).unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(Token::from_raw_ids(&[1, 0]).is_none());
    }

    #[test]
    fn test_token_serialization() {
        let t = Token::new(4).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "4");
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<Token>("0").is_err());
    }
}
