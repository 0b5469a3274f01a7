//! Bitboard masks and decoding.
//!
//! The engine exposes a board as two masks: `occupied` (a disc sits on the
//! cell) and `color` (the disc is White). Bit `y * 8 + x` describes cell
//! `(x, y)`, with `y = 0` being the top row (row label 8).

use crate::types::{Color, Coord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded cell value for an empty cell.
pub const EMPTY: i8 = 0;
/// Decoded cell value for a White disc (color bit set).
pub const WHITE: i8 = 1;
/// Decoded cell value for a Black disc (color bit clear).
pub const BLACK: i8 = -1;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;
pub const NOT_FILE_A: u64 = !FILE_A;
pub const NOT_FILE_H: u64 = !FILE_H;

/// Outer ring of the board, corners included.
pub const EDGES: u64 = 0xFF81_8181_8181_81FF;
pub const CORNERS: u64 = 0x8100_0000_0000_0081;

/// Raw engine masks for one position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub occupied: u64,
    pub color: u64,
}

impl BoardState {
    pub fn new(occupied: u64, color: u64) -> Self {
        Self { occupied, color }
    }

    /// Discs owned by `color`. Color bits outside `occupied` are ignored.
    pub fn discs(self, color: Color) -> u64 {
        match color {
            Color::White => self.occupied & self.color,
            Color::Black => self.occupied & !self.color,
        }
    }

    pub fn decode(self) -> Grid {
        decode(self.occupied, self.color)
    }
}

/// Signed 8x8 view of a position, indexed `cells[y][x]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cells: [[i8; 8]; 8],
}

impl Grid {
    pub fn get(&self, coord: Coord) -> i8 {
        self.cells[coord.y() as usize][coord.x() as usize]
    }

    pub fn row(&self, y: usize) -> [i8; 8] {
        self.cells[y]
    }

    pub fn count(&self, value: i8) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == value).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{}", 8 - y)?;
            for &cell in row {
                let c = match cell {
                    WHITE => 'W',
                    BLACK => 'B',
                    _ => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Decode the engine masks into signed cells.
///
/// Empty cells are 0, Black discs -1, White discs +1. Total over all inputs.
pub fn decode(occupied: u64, color: u64) -> Grid {
    let mut grid = Grid::default();
    for y in 0..8 {
        let filled_row = occupied >> (8 * y);
        let color_row = color >> (8 * y);
        for x in 0..8 {
            let filled = ((filled_row >> x) & 1) as i8;
            let white = ((color_row >> x) & 1) as i8;
            grid.cells[y][x] = filled * ((white << 1) - 1);
        }
    }
    grid
}

/// Cells whose decoded value differs between two grids, in row-major order.
/// Front-ends use this to repaint only what changed.
pub fn changed_cells(prev: &Grid, next: &Grid) -> Vec<(Coord, i8)> {
    let mut changed = Vec::new();
    for y in 0..8u8 {
        for x in 0..8u8 {
            let value = next.cells[y as usize][x as usize];
            if prev.cells[y as usize][x as usize] != value {
                changed.push((Coord::from_index(y * 8 + x), value));
            }
        }
    }
    changed
}

/// Iterate the set bits of a mask as coordinates, lowest index first.
pub fn coords(mut mask: u64) -> impl Iterator<Item = Coord> {
    std::iter::from_fn(move || {
        if mask == 0 {
            None
        } else {
            let idx = mask.trailing_zeros() as u8;
            mask &= mask - 1;
            Some(Coord::from_index(idx))
        }
    })
}

/// Shift every disc one step in direction `dir` (0..8), dropping discs that
/// would wrap around a board edge.
#[inline(always)]
pub(crate) fn shift(b: u64, dir: usize) -> u64 {
    match dir {
        0 => (b << 1) & NOT_FILE_A, // east
        1 => (b >> 1) & NOT_FILE_H, // west
        2 => b << 8,                // south
        3 => b >> 8,                // north
        4 => (b << 9) & NOT_FILE_A, // south-east
        5 => (b << 7) & NOT_FILE_H, // south-west
        6 => (b >> 7) & NOT_FILE_A, // north-east
        7 => (b >> 9) & NOT_FILE_H, // north-west
        _ => unreachable!("only eight directions"),
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
