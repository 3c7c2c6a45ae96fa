//! Core types: tokens, configuration, board, state, RNG.
//!
//! These are plain values. All rules live in [`crate::rules`].

pub mod token;
pub mod config;
pub mod board;
pub mod state;
pub mod rng;

pub use token::{Cell, Token};
pub use config::GameConfig;
pub use board::Board;
pub use state::GameState;
pub use rng::GameRng;
