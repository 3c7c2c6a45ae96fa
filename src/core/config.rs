//! Game configuration.
//!
//! A `GameConfig` fixes the board shape, the winning line length `k`, and
//! the ordered sequence of player tokens. It is immutable once an engine is
//! built from it.
//!
//! ```
//! use connect_k::core::GameConfig;
//!
//! let config = GameConfig::new(5, 5, 3).with_tokens(&[1, 2, 3]).unwrap();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.player_count(), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::Token;
use crate::error::ConfigError;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (row 0 is the top).
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Line length required to win.
    pub k: usize,

    /// Player tokens, cycled in order. Index 0 moves first.
    pub players: Vec<Token>,
}

impl Default for GameConfig {
    /// Standard Connect Four: 6x7, four in a row, players 1 and 2.
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 7,
            k: 4,
            players: default_players(),
        }
    }
}

fn default_players() -> Vec<Token> {
    [1, 2].into_iter().filter_map(Token::new).collect()
}

impl GameConfig {
    /// Create a configuration with the default players `[1, 2]`.
    pub fn new(rows: usize, cols: usize, k: usize) -> Self {
        Self {
            rows,
            cols,
            k,
            players: default_players(),
        }
    }

    /// Replace the player sequence.
    #[must_use]
    pub fn with_players(mut self, players: Vec<Token>) -> Self {
        self.players = players;
        self
    }

    /// Replace the player sequence from raw ids.
    ///
    /// Returns `None` if any id is 0 (reserved for empty cells).
    #[must_use]
    pub fn with_tokens(self, ids: &[u8]) -> Option<Self> {
        Token::from_raw_ids(ids).map(|players| self.with_players(players))
    }

    /// Number of players in the rotation.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the shape/line/player constraints.
    ///
    /// A single player is accepted (degenerate self-play).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroLineLength);
        }
        if self.k > self.rows.min(self.cols) {
            return Err(ConfigError::LineTooLong {
                k: self.k,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.players.len()));
        }
        for (i, token) in self.players.iter().enumerate() {
            if self.players[..i].contains(token) {
                return Err(ConfigError::DuplicateToken(*token));
            }
        }
        Ok(())
    }
}
