pub mod bitboard;
pub mod board;
pub mod engine;
pub mod types;

pub use bitboard::{changed_cells, decode, BoardState, Grid};
pub use board::Board;
pub use engine::LocalEngine;
pub use types::*;

// =============================================================================
// Strategy trait — implemented by every bot (random, positional, search)
// =============================================================================

/// A move-selection procedure for one color.
///
/// Strategies only choose; the engine applies the move. Returning `None`
/// means the strategy found no legal move for `color`.
pub trait Strategy: Send {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord>;

    /// Display name, used in logs.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}

// =============================================================================
// Engine trait — the only surface the session and tournament code talk to
// =============================================================================

/// The game engine: owns the board, the rules and the installed strategies.
///
/// Strategies are installed in two steps, mirroring how a front-end picks
/// a bot and then a seat for it: `stage_strategy` followed by
/// `assign_staged(color)`. Assigning with nothing staged leaves that color
/// without a strategy, i.e. human-controlled.
pub trait Engine {
    /// Stage a strategy for the next `assign_staged` call.
    fn stage_strategy(&mut self, strategy: Box<dyn Strategy>);

    /// Move the staged strategy (or nothing) into `color`'s seat.
    fn assign_staged(&mut self, color: Color);

    /// Reset the board to the starting position. Installed strategies stay.
    fn start_game(&mut self);

    /// Attempt a human move. Illegal moves return false and change nothing.
    fn try_place(&mut self, coord: Coord, color: Color) -> bool;

    fn has_legal_move(&self, color: Color) -> bool;

    /// Let `color`'s strategy move. `None` means it found no legal move and
    /// the turn is skipped.
    fn run_strategy_move(&mut self, color: Color) -> Option<Coord>;

    fn count_pieces(&self, color: Color) -> u32;

    fn occupied_mask(&self) -> u64;

    fn color_mask(&self) -> u64;

    /// Both masks at once.
    fn board_state(&self) -> BoardState {
        BoardState::new(self.occupied_mask(), self.color_mask())
    }
}
