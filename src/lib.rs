//! # connect-k
//!
//! A connect-k board game engine: Connect Four generalized to any
//! rectangular board size, any line length `k`, and any number of players.
//!
//! ## Design Principles
//!
//! 1. **One Engine**: `BoardEngine` owns the grid, player rotation, and move
//!    counter. Everything else (rendering, persistence, drivers) consumes its
//!    public operations.
//!
//! 2. **N-Player**: players are an ordered list of tokens cycled in order.
//!    A single player is allowed (self-play).
//!
//! 3. **Copies Out**: every state the engine hands out is a clone; callers
//!    can't reach engine internals.
//!
//! ## Modules
//!
//! - `core`: tokens, configuration, board, state, RNG
//! - `rules`: the board engine and line detection
//! - `persist`: snapshot save/load
//! - `render`: text rendering
//! - `driver`: move policies and playout loops
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use connect_k::{BoardEngine, GameConfig, GameResult, Token};
//!
//! let config = GameConfig::default().with_tokens(&[1]).unwrap();
//! let mut engine = BoardEngine::started(config).unwrap();
//! for _ in 0..4 {
//!     engine.transition(0).unwrap();
//! }
//! assert!(engine.terminal().unwrap());
//! assert_eq!(engine.report().unwrap(), GameResult::Win(Token::new(1).unwrap()));
//! ```

pub mod core;
pub mod rules;
pub mod persist;
pub mod render;
pub mod driver;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameConfig, GameRng, GameState, Token};

pub use crate::rules::{BoardEngine, Direction, GameResult, Line};

pub use crate::persist::Snapshot;

pub use crate::render::Frame;

pub use crate::driver::{play, play_series, FirstLegal, MovePolicy, Playout, SeriesStats, UniformRandom};

pub use crate::error::{ConfigError, EngineError, PersistError};
