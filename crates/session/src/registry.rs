//! Registered strategies and player assignments.

use othello_core::{Color, Engine, Strategy};
use positional_engine::{
    CenterStrategy, EdgeExclusiveStrategy, EdgeStrategy, FirstValidStrategy, LastValidStrategy,
    ShallowScoreStrategy,
};
use random_engine::RandomStrategy;
use search_engine::SearchStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of the sentinel entry that installs no strategy.
pub const HUMAN: &str = "Human";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyId {
    DeepNegativeHeuristic,
    Center,
    BottomRight,
    TopLeft,
    Random,
    ShallowScore,
    Edge,
    EdgeExclusive,
    MinmaxScore,
    DeepScore,
    DeepHeuristic,
}

impl StrategyId {
    /// Every strategy in registration order.
    pub const ALL: [StrategyId; 11] = [
        StrategyId::DeepNegativeHeuristic,
        StrategyId::Center,
        StrategyId::BottomRight,
        StrategyId::TopLeft,
        StrategyId::Random,
        StrategyId::ShallowScore,
        StrategyId::Edge,
        StrategyId::EdgeExclusive,
        StrategyId::MinmaxScore,
        StrategyId::DeepScore,
        StrategyId::DeepHeuristic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyId::DeepNegativeHeuristic => "Deep Negative Heuristic Bot",
            StrategyId::Center => "Center Bot",
            StrategyId::BottomRight => "Bottom Right Bot",
            StrategyId::TopLeft => "Top Left Bot",
            StrategyId::Random => "Random Bot",
            StrategyId::ShallowScore => "Shallow Score Bot",
            StrategyId::Edge => "Edge Bot",
            StrategyId::EdgeExclusive => "Edge Exclusive Bot",
            StrategyId::MinmaxScore => "Minmax Score Bot",
            StrategyId::DeepScore => "Deep Score Bot",
            StrategyId::DeepHeuristic => "Deep Heuristic Bot",
        }
    }

    /// Fresh instance of the strategy.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyId::DeepNegativeHeuristic => Box::new(SearchStrategy::deep_negative_heuristic()),
            StrategyId::Center => Box::new(CenterStrategy::new()),
            StrategyId::BottomRight => Box::new(LastValidStrategy::new()),
            StrategyId::TopLeft => Box::new(FirstValidStrategy::new()),
            StrategyId::Random => Box::new(RandomStrategy::new()),
            StrategyId::ShallowScore => Box::new(ShallowScoreStrategy::new()),
            StrategyId::Edge => Box::new(EdgeStrategy::new()),
            StrategyId::EdgeExclusive => Box::new(EdgeExclusiveStrategy::new()),
            StrategyId::MinmaxScore => Box::new(SearchStrategy::minmax_score()),
            StrategyId::DeepScore => Box::new(SearchStrategy::deep_score()),
            StrategyId::DeepHeuristic => Box::new(SearchStrategy::deep_heuristic()),
        }
    }

    /// Stage this strategy on the engine; the caller assigns it a color.
    pub fn configure<E: Engine + ?Sized>(self, engine: &mut E) {
        engine.stage_strategy(self.build());
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}")]
pub struct UnknownStrategy(pub String);

/// Lenient name matching: case, spaces, dashes and a trailing "bot" are
/// ignored, so "deep-score", "Deep Score Bot" and "deepscore" all match.
fn normalize(name: &str) -> String {
    let squashed: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    squashed
        .strip_suffix("bot")
        .map(str::to_string)
        .unwrap_or(squashed)
}

impl FromStr for StrategyId {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        StrategyId::ALL
            .into_iter()
            .find(|id| normalize(id.name()) == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Who supplies moves for one color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAssignment {
    #[default]
    Human,
    Strategy(StrategyId),
}

impl PlayerAssignment {
    pub fn is_human(self) -> bool {
        self == PlayerAssignment::Human
    }

    pub fn strategy(self) -> Option<StrategyId> {
        match self {
            PlayerAssignment::Human => None,
            PlayerAssignment::Strategy(id) => Some(id),
        }
    }

    /// Install this assignment in `color`'s seat. Human installs nothing.
    pub fn configure<E: Engine + ?Sized>(self, engine: &mut E, color: Color) {
        if let PlayerAssignment::Strategy(id) = self {
            id.configure(engine);
        }
        engine.assign_staged(color);
    }
}

impl fmt::Display for PlayerAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAssignment::Human => f.write_str(HUMAN),
            PlayerAssignment::Strategy(id) => f.write_str(id.name()),
        }
    }
}

impl FromStr for PlayerAssignment {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize(s) == normalize(HUMAN) {
            return Ok(PlayerAssignment::Human);
        }
        s.parse().map(PlayerAssignment::Strategy)
    }
}

/// Ordered set of strategies. The order drives tournament pairings and the
/// player selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyRegistry {
    ids: Vec<StrategyId>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl StrategyRegistry {
    /// All strategies in registration order.
    pub fn standard() -> Self {
        Self {
            ids: StrategyId::ALL.to_vec(),
        }
    }

    /// A registry with a custom selection and order. Duplicates are dropped.
    pub fn with(ids: impl IntoIterator<Item = StrategyId>) -> Self {
        let mut unique = Vec::new();
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { ids: unique }
    }

    pub fn ids(&self) -> &[StrategyId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ids.iter().map(|id| id.name())
    }

    /// Selector entries: Human first, then every registered strategy.
    pub fn choices(&self) -> Vec<PlayerAssignment> {
        std::iter::once(PlayerAssignment::Human)
            .chain(self.ids.iter().copied().map(PlayerAssignment::Strategy))
            .collect()
    }

    pub fn lookup(&self, name: &str) -> Result<StrategyId, UnknownStrategy> {
        let id: StrategyId = name.parse()?;
        if self.ids.contains(&id) {
            Ok(id)
        } else {
            Err(UnknownStrategy(name.to_string()))
        }
    }

    /// Parse a selector entry, Human included.
    pub fn assignment(&self, name: &str) -> Result<PlayerAssignment, UnknownStrategy> {
        match name.parse::<PlayerAssignment>()? {
            PlayerAssignment::Human => Ok(PlayerAssignment::Human),
            PlayerAssignment::Strategy(_) => self.lookup(name).map(PlayerAssignment::Strategy),
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
