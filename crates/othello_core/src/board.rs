//! Reference Othello rules on top of the engine masks.

use crate::bitboard::{coords, shift, BoardState};
use crate::types::{Color, Coord};

/// Starting position: White on d5 and e4, Black on e5 and d4.
const START_FILLED: u64 = 0x0000_0018_1800_0000;
const START_COLOR: u64 = 0x0000_0010_0800_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub filled: u64,
    pub color: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            filled: START_FILLED,
            color: START_COLOR,
        }
    }

    pub fn empty() -> Self {
        Self {
            filled: 0,
            color: 0,
        }
    }

    pub fn from_state(state: BoardState) -> Self {
        Self {
            filled: state.occupied,
            color: state.color & state.occupied,
        }
    }

    pub fn state(&self) -> BoardState {
        BoardState::new(self.filled, self.color)
    }

    /// Put a disc on a cell regardless of legality.
    pub fn set(&mut self, coord: Coord, color: Color) {
        let bit = coord.bit();
        self.filled |= bit;
        if color.is_white() {
            self.color |= bit;
        } else {
            self.color &= !bit;
        }
    }

    pub fn clear(&mut self, coord: Coord) {
        let bit = coord.bit();
        self.filled &= !bit;
        self.color &= !bit;
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.filled & coord.bit() != 0
    }

    /// Color of the disc on `coord`, if any.
    pub fn color_at(&self, coord: Coord) -> Option<Color> {
        if !self.is_occupied(coord) {
            None
        } else if self.color & coord.bit() != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    pub fn discs(&self, color: Color) -> u64 {
        self.state().discs(color)
    }

    pub fn count_pieces(&self, color: Color) -> u32 {
        self.discs(color).count_ones()
    }

    /// Mask of every cell where `color` may legally place a disc.
    pub fn legal_moves(&self, color: Color) -> u64 {
        let own = self.discs(color);
        let opp = self.discs(color.other());
        let empty = !self.filled;

        let mut moves = 0;
        for dir in 0..8 {
            let mut run = shift(own, dir) & opp;
            for _ in 0..5 {
                run |= shift(run, dir) & opp;
            }
            moves |= shift(run, dir) & empty;
        }
        moves
    }

    /// Legal moves in row-major order (a8, b8, ..., h1).
    pub fn valid_moves(&self, color: Color) -> Vec<Coord> {
        coords(self.legal_moves(color)).collect()
    }

    pub fn has_valid_move(&self, color: Color) -> bool {
        self.legal_moves(color) != 0
    }

    pub fn is_valid_move(&self, coord: Coord, color: Color) -> bool {
        self.legal_moves(color) & coord.bit() != 0
    }

    /// Discs that placing `color` on `coord` would flip. Empty if the move is
    /// illegal.
    pub fn flips(&self, coord: Coord, color: Color) -> u64 {
        if self.is_occupied(coord) {
            return 0;
        }
        let own = self.discs(color);
        let opp = self.discs(color.other());
        let start = coord.bit();

        let mut flipped = 0;
        for dir in 0..8 {
            let mut line = 0;
            let mut cursor = shift(start, dir);
            while cursor & opp != 0 {
                line |= cursor;
                cursor = shift(cursor, dir);
            }
            if cursor & own != 0 {
                flipped |= line;
            }
        }
        flipped
    }

    /// Place a disc and flip the captured lines.
    ///
    /// Returns false and leaves the board untouched if the move is illegal.
    pub fn try_place(&mut self, coord: Coord, color: Color) -> bool {
        let flipped = self.flips(coord, color);
        if flipped == 0 {
            return false;
        }
        let changed = flipped | coord.bit();
        self.filled |= changed;
        if color.is_white() {
            self.color |= changed;
        } else {
            self.color &= !changed;
        }
        true
    }

    /// Board after `color` plays `coord`, or None if the move is illegal.
    pub fn after(&self, coord: Coord, color: Color) -> Option<Board> {
        let mut next = *self;
        next.try_place(coord, color).then_some(next)
    }

    pub fn is_full(&self) -> bool {
        self.filled == !0
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
