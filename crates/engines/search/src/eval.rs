//! Static evaluation, always from `color`'s point of view.

use othello_core::bitboard::{CORNERS, EDGES};
use othello_core::{Board, Color};

/// Border cells excluding the corners.
const SIDES: u64 = EDGES & !CORNERS;

const SIDE_WEIGHT: f32 = 3.0;
const CORNER_WEIGHT: f32 = 10.0;

/// Evaluation function signature shared by the search strategies.
pub type Evaluator = fn(&Board, Color) -> f32;

/// Own disc count.
pub fn disc_count(board: &Board, color: Color) -> f32 {
    board.count_pieces(color) as f32
}

/// Disc difference plus border control.
///
/// Sides and corners weigh up to twice as much on an empty board and fade
/// to their base weight as the board fills.
pub fn positional(board: &Board, color: Color) -> f32 {
    let own = board.discs(color);
    let opp = board.discs(color.other());

    let score = own.count_ones() as f32;
    let opponent_score = opp.count_ones() as f32;
    let remaining = 1.0 - (score + opponent_score) / 64.0;

    let sides = (own & SIDES).count_ones() as f32 - (opp & SIDES).count_ones() as f32;
    let corners = (own & CORNERS).count_ones() as f32 - (opp & CORNERS).count_ones() as f32;

    (score - opponent_score) + (sides * SIDE_WEIGHT + corners * CORNER_WEIGHT) * (1.0 + remaining)
}
