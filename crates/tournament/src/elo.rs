//! Elo rating calculation and tracking

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Starting rating for every strategy
pub const DEFAULT_ELO: f64 = 0.0;

/// K-factor for Elo updates
pub const K_FACTOR: f64 = 16.0;

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("failed to read standings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write standings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed standings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rating and game counts for one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub rating: f64,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Standing {
    /// Points per game (1 for a win, 0.5 for a draw)
    pub fn score(&self) -> f64 {
        if self.games == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / self.games as f64
    }
}

/// Probability-like expected score of `rating` against `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

/// Rating table keyed by strategy name, iterated in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EloTracker {
    ratings: IndexMap<String, Standing>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker with every name registered at `DEFAULT_ELO`, in order.
    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tracker = Self::new();
        for name in names {
            tracker.register(name);
        }
        tracker
    }

    /// Add a strategy if it is not tracked yet. Existing entries are kept.
    pub fn register(&mut self, name: impl Into<String>) {
        self.ratings.entry(name.into()).or_insert(Standing {
            rating: DEFAULT_ELO,
            ..Default::default()
        });
    }

    /// The entries for `names`, in that order. Names without an entry start
    /// at `DEFAULT_ELO`.
    pub fn subset<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tracker = Self::new();
        for name in names {
            let standing = self.ratings.get(name).copied().unwrap_or(Standing {
                rating: DEFAULT_ELO,
                ..Default::default()
            });
            tracker.ratings.insert(name.to_string(), standing);
        }
        tracker
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Standing> {
        self.ratings.get(name)
    }

    /// Current rating, `DEFAULT_ELO` for unknown names.
    pub fn rating(&self, name: &str) -> f64 {
        self.ratings.get(name).map_or(DEFAULT_ELO, |s| s.rating)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Standing)> {
        self.ratings.iter().map(|(name, s)| (name.as_str(), s))
    }

    fn standing_mut(&mut self, name: &str) -> &mut Standing {
        self.ratings.entry(name.to_string()).or_default()
    }

    /// Both new ratings come from the ratings before the game and are then
    /// written back, `a` first. When a strategy meets itself the second write
    /// wins.
    fn apply(&mut self, a: &str, b: &str, score_a: f64) {
        let ra = self.rating(a);
        let rb = self.rating(b);
        let new_a = ra + K_FACTOR * (score_a - expected_score(ra, rb));
        let new_b = rb + K_FACTOR * ((1.0 - score_a) - expected_score(rb, ra));

        self.standing_mut(a).rating = new_a;
        self.standing_mut(b).rating = new_b;
        tracing::trace!(a, b, new_a, new_b, "rating update");
    }

    pub fn record_win(&mut self, winner: &str, loser: &str) {
        self.apply(winner, loser, 1.0);

        let w = self.standing_mut(winner);
        w.games += 1;
        w.wins += 1;
        let l = self.standing_mut(loser);
        l.games += 1;
        l.losses += 1;
    }

    pub fn record_draw(&mut self, a: &str, b: &str) {
        self.apply(a, b, 0.5);

        for name in [a, b] {
            let s = self.standing_mut(name);
            s.games += 1;
            s.draws += 1;
        }
    }

    /// Entries sorted by rating, best first. Ties keep registration order.
    pub fn leaderboard(&self) -> Vec<(String, Standing)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, s)| (name.clone(), *s))
            .collect();
        entries.sort_by(|a, b| {
            b.1.rating
                .partial_cmp(&a.1.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }

    /// One `"<name>: <rating>"` line per strategy, in registration order.
    pub fn standings_lines(&self) -> Vec<String> {
        self.ratings
            .iter()
            .map(|(name, s)| format!("{}: {}", name, s.rating))
            .collect()
    }

    pub fn print_standings(&self) {
        println!("{}", self.standings_lines().join("\n"));
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Strategy Leaderboard ===");
        println!(
            "{:<30} {:>9} {:>7} {:>6} {:>6} {:>6}",
            "Strategy", "Elo", "Games", "W", "L", "D"
        );
        println!("{}", "-".repeat(70));
        for (name, s) in self.leaderboard() {
            println!(
                "{:<30} {:>9.1} {:>7} {:>6} {:>6} {:>6}",
                name, s.rating, s.games, s.wins, s.losses, s.draws
            );
        }
        println!();
    }

    /// Load tracker from a JSON file
    pub fn load(path: &Path) -> Result<Self, StandingsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandingsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StandingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| StandingsError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
