//! Error types for configuration, play, and persistence.

use crate::core::Token;

/// Errors raised while validating a `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("line length k must be at least 1")]
    ZeroLineLength,

    #[error("line length {k} does not fit a {rows}x{cols} board")]
    LineTooLong { k: usize, rows: usize, cols: usize },

    #[error("at least one player token is required")]
    NoPlayers,

    #[error("at most 255 players supported (got {0})")]
    TooManyPlayers(usize),

    #[error("player token {0} listed more than once")]
    DuplicateToken(Token),
}

/// Errors raised by the board engine during play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("engine has not been started")]
    NotStarted,

    #[error("illegal action {action} (legal: {legal:?})")]
    IllegalAction { action: usize, legal: Vec<usize> },

    #[error("state does not match config: {0}")]
    IllegalState(String),

    #[error("game is not over")]
    NotTerminal,

    #[error("playout stalled after {0} moves with the game still open")]
    Stalled(u64),
}

/// Errors raised while saving or loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] bincode::Error),

    #[error("not a connect-k snapshot")]
    BadMagic,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u16),

    #[error("corrupt snapshot: {0}")]
    CorruptState(String),

    #[error("unexpected data after snapshot payload")]
    TrailingData,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::LineTooLong { k: 5, rows: 4, cols: 7 };
        assert_eq!(err.to_string(), "line length 5 does not fit a 4x7 board");
    }

    #[test]
    fn test_illegal_action_display() {
        let err = EngineError::IllegalAction {
            action: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(err.to_string(), "illegal action 5 (legal: [0, 1, 2])");
    }

    #[test]
    fn test_engine_error_from_config() {
        let err: EngineError = ConfigError::NoPlayers.into();
        assert_eq!(err.to_string(), "invalid config: at least one player token is required");
    }

    #[test]
    fn test_persist_error_transparent() {
        let err: PersistError = EngineError::NotStarted.into();
        assert_eq!(err.to_string(), "engine has not been started");
    }
}
