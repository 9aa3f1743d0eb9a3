//! Game position: history window, side to move, cached status.

use crate::board::Board;
use crate::history::History;
use std::fmt;
use zero_core::{GameStatus, Player};

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current: Player,
    pub(crate) status: GameStatus,
    pub(crate) move_count: usize,
}

impl GameState {
    /// Empty board, `First` to move.
    pub fn new(width: usize, history_size: usize) -> Self {
        Self {
            history: History::new(width, history_size),
            current: Player::First,
            status: GameStatus::Ongoing,
            move_count: 0,
        }
    }

    /// The board after the latest move.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Stones placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_action(&self) -> Option<usize> {
        self.history.last_action()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board())
    }
}
