use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Disc colors. Black always moves first; White discs carry a set bit in the
/// color mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Single-letter tag used in history lines and board dumps.
    pub fn tag(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// Value of this color's bit in the color mask.
    pub fn is_white(self) -> bool {
        self == Color::White
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A cell on the 8x8 board. `x` is the column (a..h), `y` the row counted
/// from the top, so `y = 0` is printed as row 8. Always on the board.
///
/// Serialized as its notation (`"d3"`), so deserializing re-checks the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Bit index in the engine masks.
    pub fn index(self) -> u8 {
        self.y * 8 + self.x
    }

    /// Cell for a bit index; only the low six bits are used.
    pub fn from_index(idx: u8) -> Self {
        debug_assert!(idx < 64);
        let idx = idx & 63;
        Self {
            x: idx % 8,
            y: idx / 8,
        }
    }

    pub fn bit(self) -> u64 {
        1u64 << self.index()
    }
}

impl From<Coord> for String {
    fn from(coord: Coord) -> Self {
        coord.to_string()
    }
}

impl TryFrom<String> for Coord {
    type Error = ParseCoordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = (b'a' + self.x) as char;
        let row = 8 - self.y;
        write!(f, "{column}{row}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate {0:?}, expected a column a-h followed by a row 1-8")]
pub struct ParseCoordError(pub String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.trim().as_bytes();
        if b.len() != 2 {
            return Err(ParseCoordError(s.to_string()));
        }
        let column = b[0].to_ascii_lowercase();
        let row = b[1];
        if !(b'a'..=b'h').contains(&column) || !(b'1'..=b'8').contains(&row) {
            return Err(ParseCoordError(s.to_string()));
        }
        Ok(Coord {
            x: column - b'a',
            y: 8 - (row - b'0'),
        })
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
