//! Text rendering of a game position.

use std::fmt;

use crate::core::{GameState, Token};
use crate::error::EngineError;
use crate::rules::BoardEngine;

/// A printable view of a position: grid, player to move, and move count.
///
/// ```text
/// =========
/// Time: 1 - Active: 2
///  -------
/// | . . . |
/// | 1 . . |
///  -------
/// =========
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub state: &'a GameState,
    pub active: Token,
}

impl<'a> Frame<'a> {
    #[must_use]
    pub fn new(state: &'a GameState, active: Token) -> Self {
        Self { state, active }
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = &self.state.board;
        let rule = "===".repeat(board.cols());
        let edge = format!(" -{}", "--".repeat(board.cols()));

        writeln!(f, "{rule}")?;
        writeln!(f, "Time: {} - Active: {}", self.state.elapsed, self.active)?;
        writeln!(f, "{edge}")?;
        for row in 0..board.rows() {
            write!(f, "| ")?;
            for cell in board.row(row) {
                match cell {
                    Some(token) => write!(f, "{token} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{edge}")?;
        writeln!(f, "{rule}")
    }
}

impl BoardEngine {
    /// Render the current position.
    pub fn render(&self) -> Result<String, EngineError> {
        let state = self.state()?;
        let active = self.active_token()?;
        Ok(Frame::new(&state, active).to_string())
    }
}
