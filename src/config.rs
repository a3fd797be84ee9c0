//! Runtime configuration read from `TUI2048_*` environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::types::DEFAULT_SEED;

pub const SEED_VAR: &str = "TUI2048_SEED";
pub const LOG_PATH_VAR: &str = "TUI2048_LOG_PATH";
pub const LOG_LEVEL_VAR: &str = "TUI2048_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the tile spawner.
    pub seed: u64,
    /// Log file; logging is off when unset because stdout belongs to the UI.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let seed = match get(SEED_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("{SEED_VAR}={raw:?} is not a u64 seed"))?,
            None => defaults.seed,
        };

        let log_level = match get(LOG_LEVEL_VAR) {
            Some(raw) => raw
                .parse::<LevelFilter>()
                .with_context(|| format!("{LOG_LEVEL_VAR}={raw:?} is not a log level"))?,
            None => defaults.log_level,
        };

        Ok(Self {
            seed,
            log_path: get(LOG_PATH_VAR).map(PathBuf::from),
            log_level,
        })
    }
}
