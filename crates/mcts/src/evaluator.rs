//! Evaluation abstraction for MCTS.
//!
//! The `Evaluator` trait is the boundary to whatever scores positions:
//! - `RolloutEvaluator` uses uniform priors and random playouts
//! - `UniformEvaluator` uses uniform priors and a neutral value
//! - a trained network plugs in behind the same trait

use rand::Rng;
use std::cell::RefCell;
use zero_core::{Game, Result};

/// Evaluation result: prior policy + value estimate.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Prior probability for each action index.
    /// Length must equal `game.num_actions()`; mass on illegal actions is ignored.
    pub policy: Vec<f32>,

    /// Value estimate from this position (from perspective of player to move).
    /// Must be in range [-1, 1].
    pub value: f32,
}

/// Trait for evaluating game positions.
///
/// The search validates every returned `Evaluation` and fails with
/// `ZeroError::EvaluatorContract` when the policy has the wrong length, a
/// legal prior is negative or non-finite, or the value leaves [-1, 1].
/// Implementations report their own failures as `ZeroError::Evaluation`.
pub trait Evaluator<G: Game> {
    /// Evaluate a position, returning prior policy and value estimate.
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Evaluation>;
}

impl<G: Game, E: Evaluator<G> + ?Sized> Evaluator<G> for &E {
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Evaluation> {
        (**self).evaluate(game, state)
    }
}

/// Uniform prior over the legal actions of `state`.
fn uniform_legal_policy<G: Game>(game: &G, state: &G::State) -> Vec<f32> {
    let legal_actions = game.legal_actions(state);
    let mut policy = vec![0.0; game.num_actions()];
    if !legal_actions.is_empty() {
        let prior = 1.0 / legal_actions.len() as f32;
        for action in legal_actions {
            policy[game.action_to_index(action)] = prior;
        }
    }
    policy
}

/// Evaluator using uniform prior and random rollouts.
///
/// - Policy: uniform distribution over legal actions
/// - Value: result of a random playout from the position
pub struct RolloutEvaluator<R: Rng> {
    rng: RefCell<R>,

    /// Maximum depth for random rollouts.
    max_rollout_depth: usize,
}

impl<R: Rng> RolloutEvaluator<R> {
    /// Create a new rollout evaluator.
    ///
    /// # Arguments
    /// * `rng` - Random number generator for rollouts
    /// * `max_rollout_depth` - Maximum moves in a random playout
    pub fn new(rng: R, max_rollout_depth: usize) -> Self {
        Self {
            rng: RefCell::new(rng),
            max_rollout_depth,
        }
    }

    /// Perform a random rollout from the given state.
    ///
    /// Returns the game outcome from the perspective of the player
    /// who was to move at the start of the rollout; 0 if the playout was cut
    /// off before the game ended.
    fn rollout<G: Game>(&self, game: &G, initial_state: &G::State) -> Result<f32> {
        let mut state = initial_state.clone();
        let mut depth = 0;

        while !game.is_terminal(&state) && depth < self.max_rollout_depth {
            let legal_actions = game.legal_actions(&state);
            if legal_actions.is_empty() {
                break;
            }

            let idx = self.rng.borrow_mut().gen_range(0..legal_actions.len());
            state = game.apply(&state, legal_actions[idx])?;
            depth += 1;
        }

        // outcome() is from the perspective of whoever made the last move,
        // which is the initial mover exactly when depth is odd.
        Ok(match game.outcome(&state) {
            Some(outcome) if depth % 2 == 1 => outcome,
            Some(outcome) => -outcome,
            None => 0.0,
        })
    }
}

impl<G: Game, R: Rng> Evaluator<G> for RolloutEvaluator<R> {
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Evaluation> {
        Ok(Evaluation {
            policy: uniform_legal_policy(game, state),
            value: self.rollout(game, state)?,
        })
    }
}

/// Uniform priors and a neutral value. Search guided by this evaluator is
/// driven purely by terminal outcomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformEvaluator;

impl<G: Game> Evaluator<G> for UniformEvaluator {
    fn evaluate(&self, game: &G, state: &G::State) -> Result<Evaluation> {
        Ok(Evaluation {
            policy: uniform_legal_policy(game, state),
            value: 0.0,
        })
    }
}
