//! Zero Gomoku - N-in-a-row games on a square grid
//!
//! Implements the transition model the search runs over: a board, the
//! rolling history window fed to the evaluator, the feature encoding, and an
//! `Environment` with `reset`/`step` for match play. Tic-tac-toe is the
//! 3×3, three-in-a-row reduction.

mod board;
mod config;
mod env;
mod game_impl;
pub mod history;
pub mod observation;
mod state;

pub use board::{decode_action, encode_action, Board, Cell};
pub use config::{FeatureEncoding, GomokuConfig};
pub use env::{Environment, Step};
pub use game_impl::Gomoku;
pub use history::History;
pub use state::GameState;
