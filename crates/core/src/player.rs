use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of a game.
///
/// `First` moves first and is rendered as `X`; `Second` is rendered as `O`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Sign of this player in the fixed global reference frame (`First` = +1).
    pub fn sign(self) -> f32 {
        match self {
            Player::First => 1.0,
            Player::Second => -1.0,
        }
    }

    /// Board symbol used by text rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Terminal classification of a position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Win(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Reward in the fixed global reference frame: +1 if `First` won,
    /// -1 if `Second` won, 0 for draws and ongoing games.
    pub fn reward(self) -> f32 {
        match self {
            GameStatus::Win(player) => player.sign(),
            GameStatus::Draw | GameStatus::Ongoing => 0.0,
        }
    }
}
