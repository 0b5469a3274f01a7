//! Append-only record of the plies of one game.

use othello_core::{Color, Coord, ParseCoordError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SKIP: &str = "Skip";

/// What happened in one ply: a disc placed on a cell, or a forced pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Notation {
    Move(Coord),
    Skip,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Move(coord) => write!(f, "{coord}"),
            Notation::Skip => f.write_str(SKIP),
        }
    }
}

impl FromStr for Notation {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(SKIP) {
            Ok(Notation::Skip)
        } else {
            s.parse().map(Notation::Move)
        }
    }
}

impl From<Notation> for String {
    fn from(notation: Notation) -> Self {
        notation.to_string()
    }
}

impl TryFrom<String> for Notation {
    type Error = ParseCoordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub color: Color,
    pub notation: Notation,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.color.tag(), self.notation)
    }
}

/// Ordered plies of the current game. Only `GameSession::start` clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_move(&mut self, color: Color, coord: Coord) {
        self.entries.push(HistoryEntry {
            color,
            notation: Notation::Move(coord),
        });
    }

    pub(crate) fn push_skip(&mut self, color: Color) {
        self.entries.push(HistoryEntry {
            color,
            notation: Notation::Skip,
        });
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn skips(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.notation == Notation::Skip)
            .count()
    }

    /// One `"<B|W>: <notation>"` line per ply.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rendering() {
        let mut log = HistoryLog::new();
        log.push_move(Color::Black, Coord::new(0, 0).unwrap());
        log.push_skip(Color::White);

        let lines: Vec<String> = log.iter().map(|e| e.to_string()).collect();
        assert_eq!(lines, vec!["B: a8", "W: Skip"]);
        assert_eq!(log.transcript(), "B: a8\nW: Skip\n");
        assert_eq!(log.skips(), 1);
    }

    #[test]
    fn test_notation_parse() {
        assert_eq!("skip".parse::<Notation>().unwrap(), Notation::Skip);
        assert_eq!(
            "h1".parse::<Notation>().unwrap(),
            Notation::Move(Coord::new(7, 7).unwrap())
        );
        assert!("z0".parse::<Notation>().is_err());
    }

    #[test]
    fn test_json_uses_notation_strings() {
        let mut log = HistoryLog::new();
        log.push_move(Color::White, Coord::new(3, 5).unwrap());
        log.push_skip(Color::Black);

        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            r#"[{"color":"White","notation":"d3"},{"color":"Black","notation":"Skip"}]"#
        );
        let back: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.push_skip(Color::Black);
        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }
}
