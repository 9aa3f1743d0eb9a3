//! Application configuration.
//!
//! Loaded from a TOML file, then environment overrides are applied:
//!
//! ```toml
//! log_level = "info"
//!
//! [game]
//! board_width = 9
//! n_in_row = 5
//! history_size = 4
//! encoding = "board_history"   # or "action_history"
//!
//! [mcts]
//! num_simulations = 400
//! c_puct = 1.5
//!
//! [selfplay]
//! games = 20
//! output = "data/selfplay"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use zero_gomoku::GomokuConfig;
use zero_mcts::MctsConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ZERO_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "zero.toml";

/// Which visit-count target is written for each training sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyTarget {
    /// Normalized visit distribution.
    #[default]
    Visits,
    /// All mass on the most visited action.
    OneHot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Games per self-play run.
    pub games: usize,

    /// Base seed; game `i` uses `seed + i`.
    pub seed: u64,

    /// Maximum playout length for the rollout evaluator.
    pub rollout_depth: usize,

    /// Directory receiving `selfplay_<iteration>.jsonl` files.
    pub output: PathBuf,

    /// File holding the last completed iteration number.
    pub iteration_file: PathBuf,

    pub policy_target: PolicyTarget,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 20,
            seed: 42,
            rollout_depth: 100,
            output: PathBuf::from("data/selfplay"),
            iteration_file: PathBuf::from("data/iteration.txt"),
            policy_target: PolicyTarget::Visits,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub game: GomokuConfig,
    pub mcts: MctsConfig,
    pub selfplay: SelfPlayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            game: GomokuConfig::default(),
            mcts: MctsConfig::default(),
            selfplay: SelfPlayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid configuration TOML")
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate().context("invalid [game] section")?;
        self.mcts.validate().context("invalid [mcts] section")?;
        Ok(())
    }
}

/// Load the configuration.
///
/// Searches, in order:
/// 1. `explicit` (the `--config` flag); an error if it cannot be read
/// 2. the file named by `ZERO_CONFIG`
/// 3. `./zero.toml`
///
/// and falls back to defaults. Environment overrides are applied last.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_from_path(path)?,
        None => search_default_paths()?,
    };
    let config = apply_env_overrides(config, |key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}

fn search_default_paths() -> Result<AppConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading config from {CONFIG_ENV}: {}", path.display());
            return load_from_path(&path);
        }
        warn!("{CONFIG_ENV}={} not found, searching defaults", path.display());
    }

    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() {
        info!("Loading config from {}", path.display());
        return load_from_path(path);
    }

    debug!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults");
    Ok(AppConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    AppConfig::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $lookup:expr, $($field:ident).+, $key:expr) => {
        if let Some(v) = $lookup($key) {
            $config.$($field).+ = v;
        }
    };
    // Parseable field
    ($config:expr, $lookup:expr, $($field:ident).+, $key:expr, parse) => {
        if let Some(raw) = $lookup($key) {
            match raw.parse() {
                Ok(v) => $config.$($field).+ = v,
                Err(_) => warn!("Ignoring {}={}: not a valid number", $key, raw),
            }
        }
    };
}

/// Apply `ZERO_*` overrides, reading variables through `lookup`.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    env_override!(config, lookup, log_level, "ZERO_LOG_LEVEL");
    env_override!(config, lookup, mcts.num_simulations, "ZERO_SIMULATIONS", parse);
    env_override!(config, lookup, game.board_width, "ZERO_BOARD_WIDTH", parse);
    config
}
