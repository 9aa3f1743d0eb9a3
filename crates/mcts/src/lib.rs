//! Monte Carlo Tree Search for AlphaZero-style play.
//!
//! This crate provides a generic MCTS implementation that can be used with
//! any game implementing the `zero_core::Game` trait.
//!
//! # Features
//!
//! - **Generic**: Works with any `Game` implementation
//! - **PUCT Selection**: Uses the PUCT formula for action selection
//! - **Evaluator Abstraction**: Rollouts, uniform priors or an external network
//! - **Tree Reuse**: The played subtree becomes the next root
//! - **Dirichlet Noise**: Adds exploration noise at the root node
//! - **Agents**: AlphaZero, random and human move selection
//!
//! # Example
//!
//! ```
//! use zero_mcts::{Mcts, MctsConfig, Node, RolloutEvaluator};
//! use zero_core::Game;
//! use zero_gomoku::Gomoku;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let game = Gomoku::tictactoe();
//! let mut root = Node::root(&game, game.initial_state());
//!
//! let config = MctsConfig::with_simulations(100);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let evaluator = RolloutEvaluator::new(rng.clone(), 20);
//! let mut mcts = Mcts::new(config, evaluator, rng);
//!
//! let result = mcts.search(&game, &mut root).unwrap();
//! println!("Best action: {:?}", result.best_action);
//! println!("Root value: {}", result.typed_value());
//!
//! // Keep the explored subtree for the next move.
//! let root = root.into_child(&game, result.best_action).unwrap();
//! assert_eq!(root.action(), Some(result.best_action));
//! ```

pub mod agent;
pub mod config;
pub mod evaluator;
pub mod node;
pub mod search;

pub use agent::{Agent, Strategy, INPUT_CLOSED};
pub use config::MctsConfig;
pub use evaluator::{Evaluation, Evaluator, RolloutEvaluator, UniformEvaluator};
pub use node::{Edge, Node};
pub use search::{Mcts, SearchResult};
