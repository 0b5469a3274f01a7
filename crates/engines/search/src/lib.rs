//! Search Othello Strategies
//!
//! Minimax strategies built on one alpha-beta routine:
//! - Minmax Score: two plies, maximise own discs after the best reply
//! - Deep Score: five plies, disc count
//! - Deep Heuristic: five plies, positional evaluation
//! - Deep Negative Heuristic: five plies, plays the move the positional
//!   evaluation likes least (a deliberately weak sparring partner)

pub mod eval;
pub mod search;

use othello_core::{Board, Color, Coord, Strategy};

pub use eval::{disc_count, positional, Evaluator};
pub use search::{alpha_beta, pick_best_move};

/// Plies searched after the root move by the deep strategies.
pub const DEEP_DEPTH: u8 = 4;

/// Alpha-beta strategy parameterised by depth and evaluation.
#[derive(Clone)]
pub struct SearchStrategy {
    name: &'static str,
    depth: u8,
    eval: Evaluator,
    negate: bool,
    nodes: u64,
}

impl SearchStrategy {
    pub fn new(name: &'static str, depth: u8, eval: Evaluator, negate: bool) -> Self {
        Self {
            name,
            depth,
            eval,
            negate,
            nodes: 0,
        }
    }

    pub fn minmax_score() -> Self {
        Self::new("Minmax Score Bot", 1, disc_count, false)
    }

    pub fn deep_score() -> Self {
        Self::new("Deep Score Bot", DEEP_DEPTH, disc_count, false)
    }

    pub fn deep_heuristic() -> Self {
        Self::new("Deep Heuristic Bot", DEEP_DEPTH, positional, false)
    }

    pub fn deep_negative_heuristic() -> Self {
        Self::new("Deep Negative Heuristic Bot", DEEP_DEPTH, positional, true)
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Strategy for SearchStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        self.nodes = 0;
        let result = pick_best_move(board, color, self.depth, self.eval, self.negate, &mut self.nodes);
        if let Some((mv, score)) = result {
            tracing::trace!(strategy = self.name, mv = %mv, score, nodes = self.nodes, "search done");
        }
        result.map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_strategies_play_legal_moves() {
        let board = Board::new();
        let mut strategies = [
            SearchStrategy::minmax_score(),
            SearchStrategy::deep_score(),
            SearchStrategy::deep_heuristic(),
            SearchStrategy::deep_negative_heuristic(),
        ];
        for strategy in strategies.iter_mut() {
            let mv = strategy.choose_move(&board, Color::Black).unwrap();
            assert!(board.is_valid_move(mv, Color::Black), "{}", strategy.name());
            assert!(strategy.nodes() > 0);
        }
    }

    #[test]
    fn minmax_score_looks_at_the_reply() {
        // g3 grabs three discs but White takes most of them back; d6 holds four.
        let mut board = Board::empty();
        for (cell, color) in [
            ("b6", Color::Black),
            ("c6", Color::White),
            ("b3", Color::White),
            ("c3", Color::Black),
            ("d3", Color::White),
            ("e3", Color::White),
            ("f3", Color::White),
        ] {
            board.set(cell.parse().unwrap(), color);
        }
        let mv = SearchStrategy::minmax_score().choose_move(&board, Color::Black);
        assert_eq!(mv, Some("d6".parse().unwrap()));
    }
}
