//! Game rules: the board engine and line detection.
//!
//! `BoardEngine` is the only stateful component. Line scanning lives in
//! `lines` so the horizontal, vertical, and diagonal scans share one
//! uniformity predicate.

pub mod engine;
pub mod lines;

pub use engine::{BoardEngine, GameResult};
pub use lines::{Direction, Line};
