//! Runtime settings read from the environment

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;

pub const ASSET_DIR_VAR: &str = "SNAKE_ASSET_DIR";
pub const SEED_VAR: &str = "SNAKE_SEED";
pub const LOG_VAR: &str = "SNAKE_LOG";

const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub asset_dir: PathBuf,
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or blank keys keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = value(ASSET_DIR_VAR) {
            settings.asset_dir = PathBuf::from(dir);
        }
        if let Some(seed) = value(SEED_VAR) {
            let seed = seed
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_VAR, seed))?;
            settings.seed = Some(seed);
        }
        if let Some(level) = value(LOG_VAR) {
            settings.log_level = LevelFilter::from_str(level.trim())
                .with_context(|| format!("{} is not a log level: {:?}", LOG_VAR, level))?;
        }

        Ok(settings)
    }

    /// Fixed seed when configured, otherwise a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
