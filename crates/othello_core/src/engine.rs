//! In-process engine: a `Board` plus one strategy seat per color.

use crate::board::Board;
use crate::types::{Color, Coord};
use crate::{Engine, Strategy};

#[derive(Default)]
pub struct LocalEngine {
    board: Board,
    seats: [Option<Box<dyn Strategy>>; 2],
    staged: Option<Box<dyn Strategy>>,
}

impl LocalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board, e.g. to resume from a saved position.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn strategy_name(&self, color: Color) -> Option<&str> {
        self.seats[color.idx()].as_ref().map(|s| s.name())
    }
}

impl Engine for LocalEngine {
    fn stage_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.staged = Some(strategy);
    }

    fn assign_staged(&mut self, color: Color) {
        self.seats[color.idx()] = self.staged.take();
    }

    fn start_game(&mut self) {
        self.board = Board::new();
        for seat in self.seats.iter_mut().flatten() {
            seat.new_game();
        }
    }

    fn try_place(&mut self, coord: Coord, color: Color) -> bool {
        self.board.try_place(coord, color)
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board.has_valid_move(color)
    }

    fn run_strategy_move(&mut self, color: Color) -> Option<Coord> {
        let strategy = self.seats[color.idx()].as_mut()?;
        let mv = strategy.choose_move(&self.board, color)?;
        if self.board.try_place(mv, color) {
            Some(mv)
        } else {
            tracing::warn!(
                strategy = strategy.name(),
                %color,
                mv = %mv,
                "strategy chose an illegal move, treating it as a skip"
            );
            None
        }
    }

    fn count_pieces(&self, color: Color) -> u32 {
        self.board.count_pieces(color)
    }

    fn occupied_mask(&self) -> u64 {
        self.board.filled
    }

    fn color_mask(&self) -> u64 {
        self.board.color
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
