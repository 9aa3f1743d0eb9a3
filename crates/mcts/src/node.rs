//! MCTS node types for tree storage.
//!
//! Each node owns its state, the statistics of its outgoing edges and the
//! children materialized so far. Subtrees are dropped together with their
//! parent, and `into_child` hands one subtree over as the next root.

use std::collections::HashMap;
use std::fmt;
use zero_core::{Game, Result};

/// Statistics for one legal action out of a node.
///
/// Values are from the perspective of the player to move at the parent.
#[derive(Clone, Debug)]
pub struct Edge<A> {
    pub action: A,

    /// Prior probability from the evaluator, renormalized over legal actions.
    pub prior: f32,

    /// Number of simulations that went through this edge.
    pub visit_count: u32,

    /// Sum of backed-up values (for computing Q-value).
    pub total_value: f32,
}

impl<A> Edge<A> {
    pub fn new(action: A, prior: f32) -> Self {
        Self {
            action,
            prior,
            visit_count: 0,
            total_value: 0.0,
        }
    }

    /// Mean value (Q-value) of this edge.
    ///
    /// Returns 0.0 if the edge has never been visited.
    pub fn mean_value(&self) -> f32 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.total_value / self.visit_count as f32
        }
    }

    pub(crate) fn record(&mut self, value: f32) {
        self.visit_count += 1;
        self.total_value += value;
    }
}

/// A node in the MCTS tree.
///
/// Nodes move one way from unexpanded to expanded. Terminal nodes are
/// classified when they are created and never expanded.
#[derive(Clone)]
pub struct Node<G: Game> {
    state: G::State,

    /// Action that led to this node (None for root).
    action: Option<G::Action>,

    /// Outgoing edges in legal-action order. Empty until expanded.
    pub(crate) edges: Vec<Edge<G::Action>>,

    /// Children created so far, keyed by the action that reaches them.
    children: HashMap<G::Action, Node<G>>,

    pub(crate) expanded: bool,

    /// Exact value for the player to move, if the state is terminal.
    terminal_value: Option<f32>,

    /// Whether root exploration noise has been mixed into the priors.
    pub(crate) noised: bool,
}

impl<G: Game> Node<G> {
    /// Create an unexpanded node, classifying terminal states.
    pub fn new(game: &G, state: G::State, action: Option<G::Action>) -> Self {
        // outcome() is from the perspective of the player who just moved.
        let terminal_value = game.outcome(&state).map(|outcome| -outcome);
        Self {
            state,
            action,
            edges: Vec::new(),
            children: HashMap::new(),
            expanded: false,
            terminal_value,
            noised: false,
        }
    }

    /// Create a root node for `state`.
    pub fn root(game: &G, state: G::State) -> Self {
        Self::new(game, state, None)
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    pub fn action(&self) -> Option<G::Action> {
        self.action
    }

    pub fn edges(&self) -> &[Edge<G::Action>] {
        &self.edges
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal_value.is_some()
    }

    pub fn terminal_value(&self) -> Option<f32> {
        self.terminal_value
    }

    /// Total visits over all outgoing edges.
    pub fn visit_count(&self) -> u32 {
        self.edges.iter().map(|e| e.visit_count).sum()
    }

    /// Visit count per legal action, in legal-action order.
    pub fn visit_counts(&self) -> Vec<(G::Action, u32)> {
        self.edges
            .iter()
            .map(|e| (e.action, e.visit_count))
            .collect()
    }

    pub fn edge(&self, action: G::Action) -> Option<&Edge<G::Action>> {
        self.edges.iter().find(|e| e.action == action)
    }

    /// The materialized child for `action`, if selection has reached it.
    pub fn child(&self, action: G::Action) -> Option<&Node<G>> {
        self.children.get(&action)
    }

    /// Number of nodes in this subtree, including this one.
    pub fn tree_size(&self) -> usize {
        1 + self.children.values().map(Node::tree_size).sum::<usize>()
    }

    /// Install edges from `(action, prior)` pairs and mark the node expanded.
    pub(crate) fn expand(&mut self, priors: impl IntoIterator<Item = (G::Action, f32)>) {
        self.edges = priors
            .into_iter()
            .map(|(action, prior)| Edge::new(action, prior))
            .collect();
        self.expanded = true;
    }

    /// The child for `action`, created from the transition model on first use.
    pub(crate) fn child_or_insert(&mut self, game: &G, action: G::Action) -> Result<&mut Node<G>> {
        use std::collections::hash_map::Entry;

        match self.children.entry(action) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let state = game.apply(&self.state, action)?;
                Ok(entry.insert(Node::new(game, state, Some(action))))
            }
        }
    }

    /// Advance past `action`, keeping its subtree and dropping the siblings.
    ///
    /// Falls back to a fresh node when the child was never materialized.
    ///
    /// # Errors
    /// Returns `ZeroError::InvalidAction` if `action` is illegal here.
    pub fn into_child(mut self, game: &G, action: G::Action) -> Result<Node<G>> {
        match self.children.remove(&action) {
            Some(child) => Ok(child),
            None => {
                let state = game.apply(&self.state, action)?;
                Ok(Node::new(game, state, Some(action)))
            }
        }
    }
}

impl<G: Game> fmt::Debug for Node<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("action", &self.action)
            .field("edges", &self.edges)
            .field("children", &self.children.len())
            .field("expanded", &self.expanded)
            .field("terminal_value", &self.terminal_value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zero_gomoku::{GameState, Gomoku};

    fn play(game: &Gomoku, moves: &[usize]) -> GameState {
        moves.iter().fold(game.initial_state(), |state, &action| {
            game.apply(&state, action).unwrap()
        })
    }

    #[test]
    fn test_edge_mean_value() {
        let mut edge = Edge::new(3usize, 0.5);

        // Unvisited edge has Q = 0
        assert_eq!(edge.mean_value(), 0.0);

        edge.record(1.0);
        edge.record(0.5);
        assert_eq!(edge.visit_count, 2);
        assert!((edge.mean_value() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_root_node() {
        let game = Gomoku::tictactoe();
        let root = Node::root(&game, game.initial_state());

        assert_eq!(root.action(), None);
        assert!(!root.is_expanded());
        assert!(!root.is_terminal());
        assert_eq!(root.visit_count(), 0);
        assert_eq!(root.tree_size(), 1);
    }

    #[test]
    fn test_terminal_classification() {
        let game = Gomoku::tictactoe();

        // X has completed the top row; O is to move and has lost.
        let won = Node::root(&game, play(&game, &[0, 3, 1, 4, 2]));
        assert_eq!(won.terminal_value(), Some(-1.0));

        let drawn = Node::root(&game, play(&game, &[0, 1, 2, 5, 3, 6, 4, 8, 7]));
        assert_eq!(drawn.terminal_value(), Some(0.0));
    }

    #[test]
    fn test_child_or_insert_is_lazy_and_stable() {
        let game = Gomoku::tictactoe();
        let mut root = Node::root(&game, game.initial_state());
        assert!(root.child(4).is_none());

        root.child_or_insert(&game, 4).unwrap().expanded = true;
        let child = root.child(4).unwrap();
        assert_eq!(child.action(), Some(4));
        assert!(child.is_expanded());

        // Second lookup returns the same node rather than a fresh one.
        assert!(root.child_or_insert(&game, 4).unwrap().is_expanded());
        assert_eq!(root.tree_size(), 2);

        assert!(root.child_or_insert(&game, 9).is_err());
    }

    #[test]
    fn test_into_child_keeps_subtree() {
        let game = Gomoku::tictactoe();
        let mut root = Node::root(&game, game.initial_state());
        root.child_or_insert(&game, 4)
            .unwrap()
            .child_or_insert(&game, 0)
            .unwrap();
        root.child_or_insert(&game, 8).unwrap();
        assert_eq!(root.tree_size(), 4);

        let child = root.into_child(&game, 4).unwrap();
        assert_eq!(child.tree_size(), 2);
        assert!(child.child(0).is_some());
    }

    #[test]
    fn test_into_child_fresh_fallback() {
        let game = Gomoku::tictactoe();
        let root = Node::root(&game, game.initial_state());

        let child = root.clone().into_child(&game, 2).unwrap();
        assert_eq!(child.action(), Some(2));
        assert_eq!(child.state().board().get(2), Some(zero_core::Player::First));
        assert!(!child.is_expanded());

        let occupied = child.into_child(&game, 2);
        assert!(occupied.is_err());
    }
}
