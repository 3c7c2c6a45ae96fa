//! Game state snapshot.
//!
//! `GameState` is the mutable triple the engine owns: the board, the index
//! of the active player in the config's rotation, and the number of moves
//! applied so far. The engine hands out clones; mutating one never touches
//! the engine.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::GameConfig;

/// Board, active player index, and elapsed move count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Index into `GameConfig::players` of the player to move.
    pub active: usize,

    /// Moves applied since the empty board.
    pub elapsed: u64,
}

impl GameState {
    /// Fresh state for a config: empty board, player 0 to move, time 0.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            active: 0,
            elapsed: 0,
        }
    }

    /// Check that this state fits a config.
    ///
    /// Verifies grid dimensions, the active index, that every placed token
    /// belongs to a configured player, and that `elapsed` does not exceed the
    /// number of placed tokens. Gravity is not checked.
    pub fn check_against(&self, config: &GameConfig) -> Result<(), String> {
        if self.board.rows() != config.rows || self.board.cols() != config.cols {
            return Err(format!(
                "grid is {}x{}, config expects {}x{}",
                self.board.rows(),
                self.board.cols(),
                config.rows,
                config.cols
            ));
        }
        if self.active >= config.player_count() {
            return Err(format!(
                "active index {} out of range for {} players",
                self.active,
                config.player_count()
            ));
        }
        if let Some(stray) = self
            .board
            .cells()
            .flatten()
            .find(|token| !config.players.contains(token))
        {
            return Err(format!("grid holds unknown token {}", stray));
        }
        let placed = self.board.occupied() as u64;
        if self.elapsed > placed {
            return Err(format!(
                "elapsed count {} exceeds {} placed tokens",
                self.elapsed, placed
            ));
        }
        Ok(())
    }
}
