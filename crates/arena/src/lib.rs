//! Zero Arena - orchestration around the search engine
//!
//! Self-play sample generation, matches between agents, interactive play,
//! configuration loading and the files shared with the external trainer.

pub mod artifacts;
pub mod config;
pub mod matches;
pub mod selfplay;

pub use artifacts::Sample;
pub use config::{AppConfig, PolicyTarget, SelfPlayConfig};
pub use matches::{build_agent, play_game, run_matches, ArenaAgent, MatchSummary};
pub use selfplay::{generate, GameRecord};
