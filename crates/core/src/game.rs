use crate::{GameStatus, Player, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// A game abstraction for AlphaZero-style planning.
///
/// This trait defines the transition model the search engine operates over.
/// It is designed for two-player, perfect-information, zero-sum games with a
/// finite, flat action space (Gomoku-class grids, tic-tac-toe, ...).
pub trait Game: Clone + Send + Sync {
    /// The game state (board, history window, side to move)
    type State: Clone + Send + Debug;

    /// A game action (e.g., a cell index)
    type Action: Clone + Copy + Send + Eq + Hash + Debug;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns all legal actions from the given state, in increasing index order.
    /// Terminal states have no legal actions.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state (immutable operation).
    ///
    /// # Errors
    /// Returns `ZeroError::InvalidAction` if the action is not legal.
    fn apply(&self, state: &Self::State, action: Self::Action) -> Result<Self::State>;

    /// The player to move in the given state
    fn current_player(&self, state: &Self::State) -> Player;

    /// Terminal classification of the state
    fn status(&self, state: &Self::State) -> GameStatus;

    /// Returns true if the game has ended (win or draw)
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.status(state).is_terminal()
    }

    /// Returns the game outcome from the perspective of the player who just moved:
    /// - `Some(1.0)` if that player won
    /// - `Some(-1.0)` if that player lost
    /// - `Some(0.0)` for a draw
    /// - `None` if the game is not terminal
    fn outcome(&self, state: &Self::State) -> Option<f32> {
        let just_moved = self.current_player(state).opposite();
        match self.status(state) {
            GameStatus::Ongoing => None,
            GameStatus::Draw => Some(0.0),
            GameStatus::Win(winner) if winner == just_moved => Some(1.0),
            GameStatus::Win(_) => Some(-1.0),
        }
    }

    /// Converts game state to the evaluator's input feature layout
    fn observe(&self, state: &Self::State) -> Vec<f32>;

    /// Maps an action to a flat index for the policy vector
    fn action_to_index(&self, action: Self::Action) -> usize;

    /// Maps a flat index back to an action, returning None if invalid
    fn index_to_action(&self, index: usize) -> Option<Self::Action>;

    /// Total number of possible action indices (size of policy vector)
    fn num_actions(&self) -> usize;

    /// Parses a human-entered move. The default accepts a flat action index.
    fn parse_action(&self, text: &str) -> Option<Self::Action> {
        text.trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| self.index_to_action(index))
    }

    /// Text rendering of a state for interactive play and logs
    fn render(&self, state: &Self::State) -> String {
        format!("{state:?}")
    }
}
