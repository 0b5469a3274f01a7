//! TOML configuration for a play session.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::registry::{PlayerAssignment, StrategyRegistry, UnknownStrategy, HUMAN};
use crate::scheduler::DEFAULT_THINKING_DELAY;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Read and deserialize a TOML file. Missing keys fall back to the type's
/// serde defaults.
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&content)?)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Delay before a scheduled bot move fires.
    pub thinking_delay_ms: u64,
    /// Player name for Black, `Human` or a registered strategy.
    pub black: String,
    pub white: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: DEFAULT_THINKING_DELAY.as_millis() as u64,
            black: HUMAN.to_string(),
            white: "Deep Heuristic Bot".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: SessionConfig = load_toml(path)?;
        config.validate(&StrategyRegistry::standard())?;
        Ok(config)
    }

    /// Load the file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self, registry: &StrategyRegistry) -> Result<(), ConfigError> {
        if self.thinking_delay_ms > 60_000 {
            return Err(ConfigError::Validation(format!(
                "thinking_delay_ms must be at most 60000, got {}",
                self.thinking_delay_ms
            )));
        }
        self.players(registry)?;
        Ok(())
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    /// Resolve both player names against `registry`.
    pub fn players(
        &self,
        registry: &StrategyRegistry,
    ) -> Result<(PlayerAssignment, PlayerAssignment), ConfigError> {
        Ok((
            registry.assignment(&self.black)?,
            registry.assignment(&self.white)?,
        ))
    }
}
