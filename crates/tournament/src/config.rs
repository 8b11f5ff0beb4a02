//! Tournament configuration loading.
//!
//! Settings come from a TOML file, then environment overrides. The search
//! depth is not configurable here; it is fixed in the engine crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TTT_CONFIG";

/// File looked up in the current directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "tournament.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: '{value}'")]
    InvalidOverride { key: String, value: String },
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Games per match
    pub games: u32,
    /// Seed for first-mover assignment and random engines (None = entropy)
    pub seed: Option<u64>,
    /// Alternate who moves first each game instead of drawing it at random
    pub alternate_first: bool,
    /// Print a line per finished game
    pub verbose: bool,
    /// Pause before each computer move in interactive play
    pub think_delay_ms: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: None,
            alternate_first: true,
            verbose: true,
            think_delay_ms: 0,
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }
}

/// Load the tournament configuration.
///
/// Searches in the following order:
/// 1. `explicit` (the `--config` flag)
/// 2. Path in the `TTT_CONFIG` environment variable
/// 3. `tournament.toml` in the current directory
///
/// Falls back to defaults when none exists, then applies `TTT_GAMES` and
/// `TTT_SEED` overrides.
pub fn load_config(explicit: Option<&Path>) -> Result<TournamentConfig, ConfigError> {
    let config = if let Some(path) = explicit {
        info!("Loading config from {}", path.display());
        TournamentConfig::from_path(path)?
    } else if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(path);
        info!("Loading config from {}: {}", CONFIG_ENV, path.display());
        TournamentConfig::from_path(&path)?
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        info!("Loading config from {}", DEFAULT_CONFIG_FILE);
        TournamentConfig::from_path(Path::new(DEFAULT_CONFIG_FILE))?
    } else {
        debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
        TournamentConfig::default()
    };

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply `TTT_GAMES` / `TTT_SEED` overrides read through `lookup`.
pub fn apply_env_overrides<F>(
    mut config: TournamentConfig,
    lookup: F,
) -> Result<TournamentConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    fn parse<T: std::str::FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
        let parsed = value.trim().parse::<T>();
        parsed.map_err(|_| ConfigError::InvalidOverride {
            key: key.to_string(),
            value,
        })
    }

    if let Some(v) = lookup("TTT_GAMES") {
        config.games = parse("TTT_GAMES", v)?;
    }
    if let Some(v) = lookup("TTT_SEED") {
        config.seed = Some(parse("TTT_SEED", v)?);
    }
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
