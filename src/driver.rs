//! Playout driver: pick moves with a policy until the game ends.
//!
//! Policies are trait-based so callers can plug in their own move choice:
//! - `UniformRandom`: seeded uniform choice among legal columns
//! - `FirstLegal`: always the lowest legal column
//!
//! ```
//! use connect_k::core::GameConfig;
//! use connect_k::driver::{play, UniformRandom};
//! use connect_k::rules::BoardEngine;
//!
//! let mut engine = BoardEngine::started(GameConfig::default()).unwrap();
//! let mut policy = UniformRandom::new(42);
//! let playout = play(&mut engine, &mut policy, |_, _| {}).unwrap();
//! assert_eq!(playout.moves.len() as u64, playout.final_state.elapsed);
//! ```

use crate::core::{GameConfig, GameRng, GameState};
use crate::error::EngineError;
use crate::rules::{BoardEngine, GameResult};

/// Chooses a column among the legal ones.
pub trait MovePolicy {
    /// Pick a move. `legal` is non-empty and ascending.
    ///
    /// Returning `None` or a column not in `legal` aborts the playout.
    fn choose(&mut self, state: &GameState, legal: &[usize]) -> Option<usize>;
}

/// Uniformly random legal move.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for UniformRandom {
    fn choose(&mut self, _state: &GameState, legal: &[usize]) -> Option<usize> {
        self.rng.choose(legal).copied()
    }
}

/// Lowest legal column.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl MovePolicy for FirstLegal {
    fn choose(&mut self, _state: &GameState, legal: &[usize]) -> Option<usize> {
        legal.first().copied()
    }
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    pub result: GameResult,
    /// Columns played, in order.
    pub moves: Vec<usize>,
    pub final_state: GameState,
}

/// Play from the engine's current position until terminal.
///
/// `observer` runs after every transition with the column just played.
pub fn play<P, F>(engine: &mut BoardEngine, policy: &mut P, mut observer: F) -> Result<Playout, EngineError>
where
    P: MovePolicy + ?Sized,
    F: FnMut(usize, &BoardEngine),
{
    let mut moves = Vec::new();

    while !engine.terminal()? {
        let legal = engine.generate_actions()?;
        let state = engine.state()?;
        if legal.is_empty() {
            return Err(EngineError::Stalled(state.elapsed));
        }
        let action = policy
            .choose(&state, &legal)
            .ok_or(EngineError::Stalled(state.elapsed))?;

        engine.transition(action)?;
        moves.push(action);
        observer(action, engine);
    }

    Ok(Playout {
        result: engine.report()?,
        moves,
        final_state: engine.state()?,
    })
}

/// Tally of a series of playouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesStats {
    /// Wins per player, aligned with `GameConfig::players`.
    pub wins: Vec<usize>,
    pub draws: usize,
    pub games: usize,
    /// Total moves across all games.
    pub moves: u64,
}

impl SeriesStats {
    /// Mean game length in moves.
    #[must_use]
    pub fn mean_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.moves as f64 / self.games as f64
        }
    }
}

/// Play `games` random games, each from an empty board with its own forked
/// RNG stream. Deterministic for a given seed.
pub fn play_series(config: &GameConfig, seed: u64, games: usize) -> Result<SeriesStats, EngineError> {
    let mut engine = BoardEngine::new(config.clone())?;
    let mut rng = GameRng::new(seed);
    let mut stats = SeriesStats {
        wins: vec![0; config.player_count()],
        draws: 0,
        games: 0,
        moves: 0,
    };

    for _ in 0..games {
        engine.start(None)?;
        let mut policy = UniformRandom::from_rng(rng.fork());
        let playout = play(&mut engine, &mut policy, |_, _| {})?;

        match playout.result {
            GameResult::Win(token) => {
                if let Some(idx) = config.players.iter().position(|&p| p == token) {
                    stats.wins[idx] += 1;
                }
            }
            GameResult::Draw => stats.draws += 1,
        }
        stats.games += 1;
        stats.moves += playout.final_state.elapsed;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    #[test]
    fn test_first_legal_single_player() {
        let config = GameConfig::default().with_tokens(&[1]).unwrap();
        let mut engine = BoardEngine::started(config).unwrap();

        let playout = play(&mut engine, &mut FirstLegal, |_, _| {}).unwrap();
        assert_eq!(playout.moves, vec![0, 0, 0, 0]);
        assert_eq!(playout.result, GameResult::Win(Token::new(1).unwrap()));
    }

    #[test]
    fn test_observer_sees_every_move() {
        let mut engine = BoardEngine::started(GameConfig::default()).unwrap();
        let mut seen = Vec::new();
        let playout = play(&mut engine, &mut UniformRandom::new(5), |action, e| {
            seen.push((action, e.state().unwrap().elapsed));
        })
        .unwrap();

        assert_eq!(seen.len(), playout.moves.len());
        for (i, (action, elapsed)) in seen.iter().enumerate() {
            assert_eq!(*action, playout.moves[i]);
            assert_eq!(*elapsed, i as u64 + 1);
        }
    }

    #[test]
    fn test_bad_policy_is_rejected() {
        struct OffBoard;
        impl MovePolicy for OffBoard {
            fn choose(&mut self, _: &GameState, _: &[usize]) -> Option<usize> {
                Some(100)
            }
        }

        let mut engine = BoardEngine::started(GameConfig::default()).unwrap();
        let err = play(&mut engine, &mut OffBoard, |_, _| {}).unwrap_err();
        assert!(matches!(err, EngineError::IllegalAction { action: 100, .. }));
    }

    #[test]
    fn test_series_tally() {
        let config = GameConfig::default();
        let stats = play_series(&config, 11, 20).unwrap();
        assert_eq!(stats.games, 20);
        assert_eq!(stats.wins.iter().sum::<usize>() + stats.draws, 20);
        assert!(stats.mean_length() >= 7.0);
        assert!(stats.mean_length() <= 42.0);
        assert_eq!(stats, play_series(&config, 11, 20).unwrap());
    }
}
