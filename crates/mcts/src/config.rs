//! MCTS configuration parameters.
//!
//! These parameters control the behavior of the Monte Carlo Tree Search
//! and of root action selection.

use serde::{Deserialize, Serialize};
use zero_core::{Result, ZeroError};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Number of simulations per search.
    pub num_simulations: usize,

    /// PUCT exploration constant.
    /// PUCT(a) = Q(a) + c_puct * P(a) * sqrt(N) / (1 + N(a))
    pub c_puct: f32,

    /// Dirichlet noise alpha (for root exploration).
    /// Higher values = more uniform noise, lower = more concentrated.
    pub dirichlet_alpha: f32,

    /// Fraction of prior replaced with Dirichlet noise at root.
    /// 0 = no exploration noise, 1 = pure noise.
    pub exploration_fraction: f32,

    /// Temperature for action selection during self-play.
    /// - 0.0: always pick highest visit count (greedy)
    /// - 1.0: sample proportional to visit counts
    pub temperature: f32,

    /// Ply at which temperature drops to 0 (greedy).
    /// Set to 0 to always use the configured temperature.
    pub temperature_drop_move: usize,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 400,
            c_puct: 1.5,
            dirichlet_alpha: 0.3,
            exploration_fraction: 0.25,
            temperature: 1.0,
            temperature_drop_move: 10,
        }
    }
}

impl MctsConfig {
    /// Create a new config with the specified number of simulations.
    pub fn with_simulations(num_simulations: usize) -> Self {
        Self {
            num_simulations,
            ..Default::default()
        }
    }

    /// Config for competitive play: greedy selection, no root noise.
    pub fn for_evaluation(num_simulations: usize) -> Self {
        Self {
            num_simulations,
            temperature: 0.0,
            temperature_drop_move: 0,
            exploration_fraction: 0.0,
            ..Default::default()
        }
    }

    /// Get the effective temperature for a given ply.
    pub fn effective_temperature(&self, ply: usize) -> f32 {
        if self.temperature_drop_move > 0 && ply >= self.temperature_drop_move {
            0.0
        } else {
            self.temperature
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.c_puct.is_finite() && self.c_puct >= 0.0) {
            return Err(ZeroError::InvalidConfig(format!(
                "c_puct must be non-negative, got {}",
                self.c_puct
            )));
        }
        if !(0.0..=1.0).contains(&self.exploration_fraction) {
            return Err(ZeroError::InvalidConfig(format!(
                "exploration_fraction must be in [0, 1], got {}",
                self.exploration_fraction
            )));
        }
        if self.exploration_fraction > 0.0
            && !(self.dirichlet_alpha.is_finite() && self.dirichlet_alpha > 0.0)
        {
            return Err(ZeroError::InvalidConfig(format!(
                "dirichlet_alpha must be positive, got {}",
                self.dirichlet_alpha
            )));
        }
        if !(self.temperature.is_finite() && self.temperature >= 0.0) {
            return Err(ZeroError::InvalidConfig(format!(
                "temperature must be finite and non-negative, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}
