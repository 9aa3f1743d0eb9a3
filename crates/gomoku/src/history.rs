//! Rolling history window consumed by the feature encoding.
//!
//! The window always holds exactly `size` boards, most recent first. A new
//! game starts with the window padded by empty boards; every move pushes the
//! resulting board to the front and evicts the oldest one. The same window
//! tracks the last `size` actions.

use crate::board::Board;
use std::collections::VecDeque;
use zero_core::{Player, Result};

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct History {
    boards: VecDeque<Board>,
    actions: VecDeque<Option<usize>>,
}

impl History {
    /// A window of `size` empty boards.
    pub fn new(width: usize, size: usize) -> Self {
        Self::starting_from(Board::new(width), size)
    }

    /// A window whose most recent entry is `board`, padded with empty boards.
    pub fn starting_from(board: Board, size: usize) -> Self {
        let size = size.max(1);
        let mut boards = VecDeque::with_capacity(size);
        let width = board.width();
        boards.push_back(board);
        boards.resize(size, Board::new(width));
        Self {
            boards,
            actions: VecDeque::from(vec![None; size]),
        }
    }

    /// The window after `player` places a stone at `action`.
    ///
    /// # Errors
    /// `ZeroError::InvalidAction` if the cell is occupied or out of range.
    pub fn advance(&self, action: usize, player: Player) -> Result<Self> {
        let next = self.current().with_stone(action, player)?;
        let mut advanced = self.clone();
        advanced.push(next, action);
        Ok(advanced)
    }

    fn push(&mut self, board: Board, action: usize) {
        self.boards.push_front(board);
        self.boards.pop_back();
        self.actions.push_front(Some(action));
        self.actions.pop_back();
    }

    /// The board after the latest move.
    pub fn current(&self) -> &Board {
        // The window is never empty: `starting_from` clamps size to >= 1.
        &self.boards[0]
    }

    /// Boards, most recent first.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Actions, most recent first; `None` before the game had that many moves.
    pub fn actions(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.actions.iter().copied()
    }

    pub fn last_action(&self) -> Option<usize> {
        self.actions[0]
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

/// Free-function form of [`History::advance`].
pub fn advance_history(history: &History, action: usize, player: Player) -> Result<History> {
    history.advance(action, player)
}
