//! Stateful environment for match play.
//!
//! Rewards use a fixed global frame: `+1` when `First` wins, `-1` when
//! `Second` wins, `0` otherwise. They are not relative to the mover.

use crate::{GameState, Gomoku};
use tracing::trace;
use zero_core::{Game, Result};

/// Result of one environment step.
#[derive(Clone, Debug)]
pub struct Step {
    pub state: GameState,
    pub reward: f32,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct Environment {
    game: Gomoku,
    state: GameState,
}

impl Environment {
    pub fn new(game: Gomoku) -> Self {
        let state = game.initial_state();
        Self { game, state }
    }

    pub fn game(&self) -> &Gomoku {
        &self.game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Start a new game and return its initial state.
    pub fn reset(&mut self) -> GameState {
        self.state = self.game.initial_state();
        self.state.clone()
    }

    /// Play `action` for the player to move.
    ///
    /// # Errors
    /// `ZeroError::InvalidAction` for an occupied or out-of-range cell, or
    /// when the game is already over. The environment is left unchanged.
    pub fn step(&mut self, action: usize) -> Result<Step> {
        let next = self.game.apply(&self.state, action)?;
        let status = next.status();
        trace!(action, ?status, "environment step");

        self.state = next;
        Ok(Step {
            state: self.state.clone(),
            reward: status.reward(),
            done: status.is_terminal(),
        })
    }

    pub fn legal_actions(&self) -> Vec<usize> {
        self.game.legal_actions(&self.state)
    }
}
