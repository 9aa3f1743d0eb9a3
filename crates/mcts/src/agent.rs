//! Move-selection agents.
//!
//! An `Agent` owns a search engine and plays one of a closed set of
//! strategies. Every strategy advances the agent's own root node, so an
//! AlphaZero agent keeps its subtree across both players' moves.

use crate::{
    evaluator::Evaluator,
    node::Node,
    search::{Mcts, SearchResult},
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::BufRead;
use tracing::debug;
use zero_core::{Game, Result, ZeroError};

/// Message carried by `ZeroError::InvalidAction` when interactive input ends.
pub const INPUT_CLOSED: &str = "input closed";

/// How an agent picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Search, then pick from the visit counts.
    AlphaZero,
    /// Uniform over legal actions, no search.
    Random,
    /// Read moves from an input stream.
    Human,
}

pub struct Agent<G: Game, E: Evaluator<G>, R: Rng> {
    strategy: Strategy,
    mcts: Mcts<G, E, R>,

    /// Plies seen in the current game, driving the temperature schedule.
    ply: usize,
}

impl<G, E, R> Agent<G, E, R>
where
    G: Game,
    E: Evaluator<G>,
    R: Rng,
{
    pub fn new(strategy: Strategy, mcts: Mcts<G, E, R>) -> Self {
        Self {
            strategy,
            mcts,
            ply: 0,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn mcts(&self) -> &Mcts<G, E, R> {
        &self.mcts
    }

    pub fn mcts_mut(&mut self) -> &mut Mcts<G, E, R> {
        &mut self.mcts
    }

    /// Forget the move count for a new game.
    pub fn reset(&mut self) {
        self.ply = 0;
    }

    /// Run a search from `node` without moving.
    pub fn search(&mut self, game: &G, node: &mut Node<G>) -> Result<SearchResult<G::Action>> {
        self.mcts.search(game, node)
    }

    /// Pick an action from a search result using this ply's temperature.
    pub fn choose(&mut self, result: &SearchResult<G::Action>) -> G::Action {
        let temperature = self.mcts.config().effective_temperature(self.ply);
        result.select_action(temperature, self.mcts.rng_mut())
    }

    /// Advance the root past `action` and count the ply.
    pub fn advance(&mut self, game: &G, node: Node<G>, action: G::Action) -> Result<Node<G>> {
        let child = node.into_child(game, action)?;
        self.ply += 1;
        Ok(child)
    }

    /// Search from `node`, pick an action and return the resulting root.
    pub fn alpha_zero(&mut self, game: &G, mut node: Node<G>) -> Result<Node<G>> {
        let result = self.search(game, &mut node)?;
        let action = self.choose(&result);
        debug!(
            ply = self.ply,
            ?action,
            visits = node.visit_count(),
            root_value = result.root_value,
            "alpha_zero move"
        );
        self.advance(game, node, action)
    }

    /// Uniformly random legal action.
    pub fn random(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        game.legal_actions(state)
            .choose(self.mcts.rng_mut())
            .copied()
            .ok_or(ZeroError::NoLegalActions)
    }

    /// Read one move from `input`.
    ///
    /// Accepts whatever `Game::parse_action` accepts. Unparseable, illegal or
    /// missing input is an `InvalidAction`; the caller decides whether to ask
    /// again.
    pub fn human<B: BufRead>(&mut self, game: &G, state: &G::State, input: &mut B) -> Result<G::Action> {
        let legal_actions = game.legal_actions(state);
        if legal_actions.is_empty() {
            return Err(ZeroError::NoLegalActions);
        }

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| ZeroError::InvalidAction(format!("failed to read move: {e}")))?;
        if read == 0 {
            return Err(ZeroError::InvalidAction(INPUT_CLOSED.to_string()));
        }

        let text = line.trim();
        let action = game
            .parse_action(text)
            .ok_or_else(|| ZeroError::InvalidAction(format!("cannot parse move '{text}'")))?;
        if !legal_actions.contains(&action) {
            return Err(ZeroError::InvalidAction(format!("move '{text}' is not legal")));
        }
        Ok(action)
    }

    /// Play one move with this agent's strategy and return the new root.
    ///
    /// `input` is only read by `Strategy::Human`.
    pub fn act<B: BufRead>(&mut self, game: &G, node: Node<G>, input: &mut B) -> Result<Node<G>> {
        match self.strategy {
            Strategy::AlphaZero => self.alpha_zero(game, node),
            Strategy::Random => {
                let action = self.random(game, node.state())?;
                self.advance(game, node, action)
            }
            Strategy::Human => {
                let action = self.human(game, node.state(), input)?;
                self.advance(game, node, action)
            }
        }
    }

    /// Follow a move made by the opponent.
    pub fn observe(&mut self, game: &G, node: Node<G>, action: G::Action) -> Result<Node<G>> {
        self.advance(game, node, action)
    }
}
