//! Board geometry and history depth.

use serde::{Deserialize, Serialize};
use zero_core::{Result, ZeroError};

/// Input layout handed to the evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureEncoding {
    /// Mover and opponent stones for every board in the history window.
    #[default]
    BoardHistory,
    /// Current stones plus one one-hot plane per action in the window.
    ActionHistory,
}

/// Parameters of an N-in-a-row game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GomokuConfig {
    /// Width (and height) of the square board.
    pub board_width: usize,

    /// Stones in a row needed to win.
    pub n_in_row: usize,

    /// Number of past boards kept for feature construction (most recent first).
    pub history_size: usize,

    pub encoding: FeatureEncoding,
}

impl Default for GomokuConfig {
    fn default() -> Self {
        Self {
            board_width: 9,
            n_in_row: 5,
            history_size: 4,
            encoding: FeatureEncoding::BoardHistory,
        }
    }
}

impl GomokuConfig {
    pub fn new(board_width: usize, n_in_row: usize, history_size: usize) -> Result<Self> {
        let config = Self {
            board_width,
            n_in_row,
            history_size,
            encoding: FeatureEncoding::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 3×3 board, three in a row, no history beyond the current board.
    pub fn tictactoe() -> Self {
        Self {
            board_width: 3,
            n_in_row: 3,
            history_size: 1,
            encoding: FeatureEncoding::BoardHistory,
        }
    }

    /// Size of the flat action space (one action per cell).
    pub fn action_size(&self) -> usize {
        self.board_width * self.board_width
    }

    /// Number of feature planes produced by the configured encoding.
    pub fn num_planes(&self) -> usize {
        match self.encoding {
            FeatureEncoding::BoardHistory => 2 * self.history_size + 1,
            FeatureEncoding::ActionHistory => self.history_size + 3,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_width == 0 {
            return Err(ZeroError::InvalidConfig("board_width must be positive".into()));
        }
        if self.n_in_row == 0 || self.n_in_row > self.board_width {
            return Err(ZeroError::InvalidConfig(format!(
                "n_in_row {} must be in 1..={}",
                self.n_in_row, self.board_width
            )));
        }
        if self.history_size == 0 {
            return Err(ZeroError::InvalidConfig("history_size must be at least 1".into()));
        }
        Ok(())
    }
}
