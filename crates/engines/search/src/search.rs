//! Fixed-depth minimax with alpha-beta pruning.

use othello_core::{Board, Color, Coord};

use crate::eval::Evaluator;

/// Value of `board` for `color` when `to_move` is next, searched `depth`
/// plies deep inside the window `[alpha, beta]`.
///
/// A side without moves passes; the pass still consumes one ply.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta(
    board: &Board,
    color: Color,
    to_move: Color,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    eval: Evaluator,
    nodes: &mut u64,
) -> f32 {
    *nodes += 1;

    if depth == 0 {
        return eval(board, color);
    }

    let moves = board.valid_moves(to_move);
    if moves.is_empty() {
        return alpha_beta(board, color, to_move.other(), depth - 1, alpha, beta, eval, nodes);
    }

    if to_move == color {
        for mv in moves {
            let Some(next) = board.after(mv, to_move) else {
                continue;
            };
            let score = alpha_beta(&next, color, to_move.other(), depth - 1, alpha, beta, eval, nodes);
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }
        alpha
    } else {
        for mv in moves {
            let Some(next) = board.after(mv, to_move) else {
                continue;
            };
            let score = alpha_beta(&next, color, to_move.other(), depth - 1, alpha, beta, eval, nodes);
            if score < beta {
                beta = score;
            }
            if beta <= alpha {
                break;
            }
        }
        beta
    }
}

/// Best root move for `color` and its value. `depth` counts the plies after
/// the root move. With `negate` the search looks for the worst move instead.
pub fn pick_best_move(
    board: &Board,
    color: Color,
    depth: u8,
    eval: Evaluator,
    negate: bool,
    nodes: &mut u64,
) -> Option<(Coord, f32)> {
    let mut best: Option<(Coord, f32)> = None;

    for mv in board.valid_moves(color) {
        let Some(next) = board.after(mv, color) else {
            continue;
        };
        let value = alpha_beta(
            &next,
            color,
            color.other(),
            depth,
            f32::NEG_INFINITY,
            f32::INFINITY,
            eval,
            nodes,
        );
        let value = if negate { -value } else { value };

        if best.map_or(true, |(_, score)| value > score) {
            best = Some((mv, value));
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
