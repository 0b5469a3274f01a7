use othello_core::{Board, Color, Coord, Strategy};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Plays the move that leaves it with the most discs, random among equals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowScoreStrategy;

impl ShallowScoreStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for ShallowScoreStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let mut moves = board.valid_moves(color);
        moves.shuffle(&mut thread_rng());
        moves.into_iter().max_by_key(|&mv| {
            board
                .after(mv, color)
                .map_or(0, |next| next.count_pieces(color))
        })
    }

    fn name(&self) -> &str {
        "Shallow Score Bot"
    }
}
