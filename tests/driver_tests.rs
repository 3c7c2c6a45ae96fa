//! Playout driver across board shapes and player counts.

use connect_k::{play, play_series, BoardEngine, FirstLegal, GameConfig, GameResult, GameState, MovePolicy, UniformRandom};

/// Same seed, same game.
#[test]
fn test_seeded_playouts_repeat() {
    for seed in [0u64, 1, 42, 2024] {
        let mut a = BoardEngine::started(GameConfig::default()).unwrap();
        let mut b = BoardEngine::started(GameConfig::default()).unwrap();
        let pa = play(&mut a, &mut UniformRandom::new(seed), |_, _| {}).unwrap();
        let pb = play(&mut b, &mut UniformRandom::new(seed), |_, _| {}).unwrap();
        assert_eq!(pa, pb);
    }
}

/// Replaying the recorded moves on a fresh engine gives the same result.
#[test]
fn test_replay_moves() {
    let config = GameConfig::new(6, 8, 4).with_tokens(&[1, 2, 3]).unwrap();
    let mut engine = BoardEngine::started(config.clone()).unwrap();
    let playout = play(&mut engine, &mut UniformRandom::new(17), |_, _| {}).unwrap();

    let mut replay = BoardEngine::started(config).unwrap();
    for &col in &playout.moves {
        assert!(!replay.terminal().unwrap());
        replay.transition(col).unwrap();
    }
    assert_eq!(replay.state().unwrap(), playout.final_state);
    assert_eq!(replay.report().unwrap(), playout.result);
}

/// Every playout ends in a win for a configured player or a draw on a
/// full board.
#[test]
fn test_playout_outcomes_are_consistent() {
    let shapes = [(4, 4, 3), (5, 5, 4), (6, 7, 4), (3, 9, 3), (7, 2, 2)];
    let player_sets: [&[u8]; 3] = [&[1], &[1, 2], &[1, 2, 3, 4]];
    for (rows, cols, k) in shapes {
        for players in player_sets {
            let config = GameConfig::new(rows, cols, k).with_tokens(players).unwrap();
            let mut engine = BoardEngine::started(config.clone()).unwrap();
            let mut policy = UniformRandom::new(rows as u64 * 31 + cols as u64);
            let playout = play(&mut engine, &mut policy, |_, _| {}).unwrap();

            assert_eq!(playout.moves.len() as u64, playout.final_state.elapsed);
            assert!(playout.final_state.board.is_settled());
            match playout.result {
                GameResult::Win(token) => {
                    assert!(config.players.contains(&token));
                    assert!(engine.winning_line().unwrap().is_some());
                }
                GameResult::Draw => {
                    assert!(playout.final_state.board.is_full());
                    assert!(engine.winning_line().unwrap().is_none());
                }
            }
        }
    }
}

/// A policy that stacks every move into the rightmost open column.
struct Rightmost;

impl MovePolicy for Rightmost {
    fn choose(&mut self, _state: &GameState, legal: &[usize]) -> Option<usize> {
        legal.last().copied()
    }
}

#[test]
fn test_custom_policy() {
    let config = GameConfig::default().with_tokens(&[1]).unwrap();
    let mut engine = BoardEngine::started(config).unwrap();
    let playout = play(&mut engine, &mut Rightmost, |_, _| {}).unwrap();
    assert_eq!(playout.moves, vec![6, 6, 6, 6]);
}

#[test]
fn test_first_legal_two_players() {
    // Columns fill left to right with the same alternating pattern, so the
    // bottom row completes first, on the first drop into column 3.
    let mut engine = BoardEngine::started(GameConfig::default()).unwrap();
    let playout = play(&mut engine, &mut FirstLegal, |_, _| {}).unwrap();

    assert!(playout.moves.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(playout.moves.len(), 19);
    assert_eq!(playout.result, GameResult::Win(connect_k::Token::new(1).unwrap()));
}

#[test]
fn test_series_is_deterministic() {
    let config = GameConfig::new(5, 5, 3).with_tokens(&[1, 2, 3]).unwrap();
    let a = play_series(&config, 7, 30).unwrap();
    let b = play_series(&config, 7, 30).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.wins.len(), 3);
    assert_eq!(a.wins.iter().sum::<usize>() + a.draws, 30);
}
