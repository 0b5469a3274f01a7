//! Tournament configuration

use serde::{Deserialize, Serialize};
use session::{load_toml, ConfigError, StrategyRegistry};
use std::path::{Path, PathBuf};

/// Standings file used when nothing else is given
pub const DEFAULT_STANDINGS_PATH: &str = "tournament_elo.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Rounds to play; `None` runs until interrupted
    pub rounds: Option<u32>,
    /// Standings file rewritten after every round
    pub save: Option<PathBuf>,
    /// Strategies taking part, in order; empty means all registered
    pub strategies: Vec<String>,
    /// Games per `duel`
    pub duel_games: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds: None,
            save: None,
            strategies: Vec::new(),
            duel_games: 100,
        }
    }
}

impl TournamentConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: TournamentConfig = load_toml(path)?;
        config.registry()?;
        Ok(config)
    }

    /// Participants as a registry, in configured order.
    pub fn registry(&self) -> Result<StrategyRegistry, ConfigError> {
        let all = StrategyRegistry::standard();
        if self.strategies.is_empty() {
            return Ok(all);
        }
        let ids = self
            .strategies
            .iter()
            .map(|name| all.lookup(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(StrategyRegistry::with(ids))
    }

    pub fn standings_path(&self) -> PathBuf {
        self.save
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STANDINGS_PATH))
    }
}
