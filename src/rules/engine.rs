//! The board engine: state machine and terminal detection.
//!
//! `BoardEngine` owns the config, the current `GameState`, and a memoized
//! legal-action set. Every mutation goes through [`BoardEngine::transition`].
//!
//! ## Lifecycle
//!
//! - `new(config)`: validates the config; the engine starts out unstarted
//! - `start(None)` / `start(Some(state))`: empty board or a seeded state
//! - `generate_actions` / `transition` / `terminal` / `report`: play
//!
//! Calling a play operation before `start` fails with
//! [`EngineError::NotStarted`].
//!
//! ## Winner attribution
//!
//! The active index advances on every transition, so by the time a line is
//! visible the player who completed it is the one *before* the active
//! player: `players[(active + n - 1) % n]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::lines::{self, Line};
use crate::core::{GameConfig, GameState, Token};
use crate::error::{ConfigError, EngineError};

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A line was completed; the token is the player who made the last move.
    Win(Token),
    /// The board filled up with no line.
    Draw,
}

impl GameResult {
    /// The winning token, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Token> {
        match self {
            GameResult::Win(token) => Some(*token),
            GameResult::Draw => None,
        }
    }

    /// Check if a token won.
    #[must_use]
    pub fn is_winner(&self, token: Token) -> bool {
        self.winner() == Some(token)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win(token) => write!(f, "result: win, winner: {}", token),
            GameResult::Draw => write!(f, "result: draw, winner: none"),
        }
    }
}

/// Legal columns, memoized by move count.
///
/// Recomputed exactly when the state's `elapsed` differs from the stored
/// key. `start` clears the key since a seeded state may reuse a count.
#[derive(Clone, Debug, Default)]
struct ActionCache {
    key: Option<u64>,
    actions: SmallVec<[usize; 16]>,
}

impl ActionCache {
    fn refresh(&mut self, state: &GameState) -> &[usize] {
        if self.key != Some(state.elapsed) {
            self.actions.clear();
            self.actions.extend(state.board.open_columns());
            self.key = Some(state.elapsed);
        }
        &self.actions
    }

    fn invalidate(&mut self) {
        self.key = None;
    }
}

/// Connect-k game engine.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: GameConfig,
    state: Option<GameState>,
    actions: ActionCache,
}

impl Default for BoardEngine {
    /// Unstarted engine for standard Connect Four.
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            state: None,
            actions: ActionCache::default(),
        }
    }
}

impl BoardEngine {
    /// Build an engine. The grid is unset until [`start`](Self::start).
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            actions: ActionCache::default(),
        })
    }

    /// Build and start on an empty board.
    pub fn started(config: GameConfig) -> Result<Self, ConfigError> {
        let mut engine = Self::new(config)?;
        engine.reset();
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    /// Reset to an empty board, or adopt a supplied state.
    ///
    /// A supplied state must match the config's grid shape, have an active
    /// index within the rotation, and hold only configured tokens; otherwise
    /// this fails with [`EngineError::IllegalState`] and the engine is left
    /// unchanged. Gravity is not checked.
    pub fn start(&mut self, initial: Option<GameState>) -> Result<GameState, EngineError> {
        match initial {
            None => Ok(self.reset()),
            Some(state) => {
                state
                    .check_against(&self.config)
                    .map_err(EngineError::IllegalState)?;
                Ok(self.adopt(state))
            }
        }
    }

    /// Adopt a state verbatim, without any checks.
    ///
    /// This is a trust boundary: the caller vouches for the state. A
    /// mismatched state never causes a panic (the active index is taken
    /// modulo the player count and line scans skip windows that don't fit)
    /// but the game it describes may not be reachable by legal play.
    pub fn start_unchecked(&mut self, state: GameState) -> GameState {
        self.adopt(state)
    }

    fn reset(&mut self) -> GameState {
        let fresh = GameState::new(&self.config);
        self.adopt(fresh)
    }

    fn adopt(&mut self, state: GameState) -> GameState {
        self.actions.invalidate();
        self.actions.refresh(&state);
        self.state = Some(state.clone());
        state
    }

    fn current(&self) -> Result<&GameState, EngineError> {
        self.state.as_ref().ok_or(EngineError::NotStarted)
    }

    fn token_at(&self, index: usize) -> Token {
        // `validate` guarantees at least one player.
        self.config.players[index % self.config.players.len()]
    }

    /// Copy of the current state.
    pub fn state(&self) -> Result<GameState, EngineError> {
        self.current().cloned()
    }

    /// Token of the player to move.
    pub fn active_token(&self) -> Result<Token, EngineError> {
        let state = self.current()?;
        Ok(self.token_at(state.active))
    }

    /// Token of the player who made the preceding move.
    pub fn previous_token(&self) -> Result<Token, EngineError> {
        let state = self.current()?;
        let n = self.config.players.len();
        Ok(self.token_at(state.active % n + n - 1))
    }

    /// Legal columns, ascending. A column is legal iff its top cell is empty.
    pub fn generate_actions(&mut self) -> Result<Vec<usize>, EngineError> {
        let state = self.state.as_ref().ok_or(EngineError::NotStarted)?;
        Ok(self.actions.refresh(state).to_vec())
    }

    /// Drop the active player's token into `action`'s column.
    ///
    /// Fails with [`EngineError::IllegalAction`] if the column is out of
    /// range or full, or [`EngineError::IllegalState`] if the move counter
    /// would overflow; the state is unchanged on failure.
    pub fn transition(&mut self, action: usize) -> Result<GameState, EngineError> {
        let n = self.config.players.len();
        let token = self.active_token()?;
        let state = self.state.as_mut().ok_or(EngineError::NotStarted)?;

        let legal = self.actions.refresh(state);
        if !legal.contains(&action) {
            return Err(EngineError::IllegalAction {
                action,
                legal: legal.to_vec(),
            });
        }

        let elapsed = state
            .elapsed
            .checked_add(1)
            .ok_or_else(|| EngineError::IllegalState("move counter overflow".to_string()))?;

        if state.board.drop_token(action, token).is_none() {
            return Err(EngineError::IllegalAction {
                action,
                legal: state.board.open_columns().collect(),
            });
        }
        state.active = (state.active % n + 1) % n;
        state.elapsed = elapsed;

        Ok(state.clone())
    }

    /// First line of `k` identical tokens on the board, if any.
    pub fn winning_line(&self) -> Result<Option<Line>, EngineError> {
        let state = self.current()?;
        Ok(lines::find_line(&state.board, self.config.k))
    }

    /// The game is over: a line exists or the board is full.
    pub fn terminal(&self) -> Result<bool, EngineError> {
        let state = self.current()?;
        Ok(state.board.is_full() || lines::find_line(&state.board, self.config.k).is_some())
    }

    /// Outcome of a finished game.
    ///
    /// A line means `Win` for the previous mover, even when the last move
    /// also filled the board. A full board without a line is a `Draw`.
    /// Fails with [`EngineError::NotTerminal`] while play can continue.
    pub fn report(&self) -> Result<GameResult, EngineError> {
        if self.winning_line()?.is_some() {
            return Ok(GameResult::Win(self.previous_token()?));
        }
        if self.current()?.board.is_full() {
            Ok(GameResult::Draw)
        } else {
            Err(EngineError::NotTerminal)
        }
    }
}
