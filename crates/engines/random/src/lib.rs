//! Random Move Othello Strategy
//!
//! A simple strategy that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any real strategy should easily beat this)
//! - Shaking out skip and termination handling in long self-play runs

use othello_core::{Board, Color, Coord, Strategy};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// A strategy that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy {
    moves_played: u64,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self { moves_played: 0 }
    }

    pub fn moves_played(&self) -> u64 {
        self.moves_played
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let moves = board.valid_moves(color);
        let choice = moves.choose(&mut thread_rng()).copied();
        if choice.is_some() {
            self.moves_played += 1;
        }
        choice
    }

    fn name(&self) -> &str {
        "Random Bot"
    }

    fn new_game(&mut self) {
        self.moves_played = 0;
    }
}
