use othello_core::{Board, Color, Coord, Strategy};

/// Always plays the first legal cell scanning a8, b8, ..., h1.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstValidStrategy;

impl FirstValidStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for FirstValidStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        board.valid_moves(color).first().copied()
    }

    fn name(&self) -> &str {
        "Top Left Bot"
    }
}

/// Always plays the last legal cell in scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastValidStrategy;

impl LastValidStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for LastValidStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        board.valid_moves(color).last().copied()
    }

    fn name(&self) -> &str {
        "Bottom Right Bot"
    }
}
