//! Zero Core - Game abstractions and common types
//!
//! This crate provides the core `Game` trait that defines the interface
//! a two-player, perfect-information, zero-sum game must implement to be
//! searched by the AlphaZero-style engine.
//!
//! # Types
//!
//! - [`Game`] - Trait for game implementations
//! - [`Player`] - The two sides, with a fixed `+1`/`-1` reference frame
//! - [`GameStatus`] - Ongoing, won or drawn
//! - [`Policy`] - Probability distribution over actions (sums to 1.0)
//! - [`Value`] - Game value estimate in [-1, 1]

mod error;
mod game;
mod player;
mod types;

pub use error::{Result, ZeroError};
pub use game::Game;
pub use player::{GameStatus, Player};
pub use types::{Policy, Value};
