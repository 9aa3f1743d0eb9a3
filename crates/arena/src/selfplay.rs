//! Self-play data generation.
//!
//! One agent plays both sides on a single reused tree. Every position
//! becomes a `Sample` whose `z` is filled in from the final result once the
//! game ends.

use crate::artifacts::Sample;
use crate::config::{PolicyTarget, SelfPlayConfig};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;
use zero_core::{Game, GameStatus, Player};
use zero_gomoku::Gomoku;
use zero_mcts::{Agent, Mcts, MctsConfig, Node, RolloutEvaluator, Strategy};

/// A finished self-play game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub samples: Vec<Sample>,
    pub status: GameStatus,
    pub seed: u64,
}

impl GameRecord {
    pub fn moves(&self) -> usize {
        self.samples.len()
    }
}

/// Play one self-play game from the initial position.
pub fn play_game(
    game: &Gomoku,
    mcts_config: &MctsConfig,
    rollout_depth: usize,
    target: PolicyTarget,
    seed: u64,
) -> Result<GameRecord> {
    let evaluator = RolloutEvaluator::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)), rollout_depth);
    let mcts = Mcts::new(mcts_config.clone(), evaluator, ChaCha8Rng::seed_from_u64(seed));
    let mut agent = Agent::new(Strategy::AlphaZero, mcts);

    let mut root = Node::root(game, game.initial_state());
    let mut positions: Vec<(Vec<f32>, Vec<f32>, Player)> = Vec::new();

    while !game.is_terminal(root.state()) {
        let result = agent
            .search(game, &mut root)
            .with_context(|| format!("search failed in game {seed} at move {}", positions.len()))?;
        let pi = match target {
            PolicyTarget::Visits => result.policy.clone(),
            PolicyTarget::OneHot => result.one_hot_policy()?,
        };
        positions.push((game.observe(root.state()), pi, game.current_player(root.state())));

        let action = agent.choose(&result);
        root = agent.advance(game, root, action)?;
    }

    let status = game.status(root.state());
    let samples = positions
        .into_iter()
        .map(|(features, pi, mover)| Sample {
            features,
            pi,
            z: match status.winner() {
                Some(winner) if winner == mover => 1.0,
                Some(_) => -1.0,
                None => 0.0,
            },
        })
        .collect();

    debug!(seed, ?status, "self-play game finished");
    Ok(GameRecord { samples, status, seed })
}

/// Play `config.games` games in parallel; game `i` is seeded with `config.seed + i`.
pub fn generate(game: &Gomoku, mcts_config: &MctsConfig, config: &SelfPlayConfig) -> Result<Vec<GameRecord>> {
    (0..config.games as u64)
        .into_par_iter()
        .map(|i| {
            play_game(
                game,
                mcts_config,
                config.rollout_depth,
                config.policy_target,
                config.seed.wrapping_add(i),
            )
        })
        .collect()
}
