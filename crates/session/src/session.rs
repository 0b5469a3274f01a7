//! Turn state machine for one game at a time.
//!
//! The session never touches the board itself: every rule question goes to
//! the `Engine`, which callers pass in explicitly on each operation.

use othello_core::{decode, Color, Coord, Engine, Grid};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::history::HistoryLog;
use crate::registry::PlayerAssignment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No game started yet.
    Idle,
    /// Game running, `Color` to move.
    AwaitingInput(Color),
    GameOver,
}

/// What the caller has to do after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Wait for a human move from this color.
    HumanToMove(Color),
    /// Trigger (or schedule) a strategy move for this color.
    BotToMove(Color),
    GameOver,
}

/// Final result by disc count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    pub fn from_counts(black: u32, white: u32) -> Self {
        if white > black {
            Outcome::WhiteWins
        } else if black > white {
            Outcome::BlackWins
        } else {
            Outcome::Draw
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::BlackWins => Some(Color::Black),
            Outcome::WhiteWins => Some(Color::White),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BlackWins => write!(f, "Black wins"),
            Outcome::WhiteWins => write!(f, "White wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Serializable summary of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub black: PlayerAssignment,
    pub white: PlayerAssignment,
    pub history: HistoryLog,
    pub black_discs: u32,
    pub white_discs: u32,
    /// None while the game is still running.
    pub outcome: Option<Outcome>,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    turn: Color,
    active: bool,
    started: bool,
    players: [PlayerAssignment; 2],
    history: HistoryLog,
    generation: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            turn: Color::Black,
            active: false,
            started: false,
            players: [PlayerAssignment::Human; 2],
            history: HistoryLog::new(),
            generation: 0,
        }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Idle
        } else if self.active {
            Phase::AwaitingInput(self.turn)
        } else {
            Phase::GameOver
        }
    }

    pub fn assignment(&self, color: Color) -> PlayerAssignment {
        self.players[color.idx()]
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Bumped by every `start`; scheduled bot moves carry the value they were
    /// scheduled under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Next step for the caller given the current state.
    pub fn control(&self) -> Control {
        if !self.active {
            Control::GameOver
        } else if self.assignment(self.turn).is_human() {
            Control::HumanToMove(self.turn)
        } else {
            Control::BotToMove(self.turn)
        }
    }

    /// Begin a new game: clear history, install both players, reset the
    /// board. Black moves first.
    pub fn start<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
        black: PlayerAssignment,
        white: PlayerAssignment,
    ) -> Control {
        self.history.clear();
        black.configure(engine, Color::Black);
        white.configure(engine, Color::White);
        engine.start_game();

        self.players = [black, white];
        self.turn = Color::Black;
        self.active = true;
        self.started = true;
        self.generation += 1;

        tracing::debug!(%black, %white, generation = self.generation, "game started");
        self.control()
    }

    /// Play a human move for the side to move.
    ///
    /// Returns `None` and changes nothing when the game is not running, the
    /// side to move is not human, the cell is off the board or the engine
    /// rejects the move.
    pub fn submit_human_move<E: Engine + ?Sized>(
        &mut self,
        engine: &mut E,
        x: u8,
        y: u8,
    ) -> Option<Control> {
        if !self.active || !self.assignment(self.turn).is_human() {
            return None;
        }
        let coord = Coord::new(x, y)?;
        if !engine.try_place(coord, self.turn) {
            tracing::debug!(color = %self.turn, mv = %coord, "illegal move ignored");
            return None;
        }

        self.history.push_move(self.turn, coord);
        self.finish_ply(engine);
        Some(self.control())
    }

    /// Let the strategy of the side to move play one ply.
    ///
    /// Returns `None` without touching anything unless the game is running
    /// and the side to move is strategy-controlled.
    pub fn run_bot_move<E: Engine + ?Sized>(&mut self, engine: &mut E) -> Option<Control> {
        if !self.active || self.assignment(self.turn).is_human() {
            return None;
        }

        match engine.run_strategy_move(self.turn) {
            Some(coord) => self.history.push_move(self.turn, coord),
            None => self.history.push_skip(self.turn),
        }
        self.finish_ply(engine);
        Some(self.control())
    }

    /// Skip the side to move if it has no legal move; end the game if the
    /// other side has none either.
    pub fn check_termination<E: Engine + ?Sized>(&mut self, engine: &E) {
        if !self.active || engine.has_legal_move(self.turn) {
            return;
        }

        self.history.push_skip(self.turn);
        tracing::debug!(color = %self.turn, "no legal move, skipping");
        self.turn = self.turn.other();

        if !engine.has_legal_move(self.turn) {
            self.active = false;
            tracing::debug!(
                black = engine.count_pieces(Color::Black),
                white = engine.count_pieces(Color::White),
                plies = self.history.len(),
                "game over"
            );
        }
    }

    fn finish_ply<E: Engine + ?Sized>(&mut self, engine: &E) {
        if let Some(entry) = self.history.last() {
            tracing::trace!(ply = self.history.len(), "{entry}");
        }
        self.turn = self.turn.other();
        self.check_termination(engine);
    }

    /// Decoded board for display.
    pub fn board<E: Engine + ?Sized>(&self, engine: &E) -> Grid {
        decode(engine.occupied_mask(), engine.color_mask())
    }

    /// (black discs, white discs)
    pub fn score<E: Engine + ?Sized>(&self, engine: &E) -> (u32, u32) {
        (
            engine.count_pieces(Color::Black),
            engine.count_pieces(Color::White),
        )
    }

    /// Result by disc count once the game is over.
    pub fn outcome<E: Engine + ?Sized>(&self, engine: &E) -> Option<Outcome> {
        if self.phase() != Phase::GameOver {
            return None;
        }
        let (black, white) = self.score(engine);
        Some(Outcome::from_counts(black, white))
    }

    pub fn record<E: Engine + ?Sized>(&self, engine: &E) -> GameRecord {
        let (black_discs, white_discs) = self.score(engine);
        GameRecord {
            black: self.assignment(Color::Black),
            white: self.assignment(Color::White),
            history: self.history.clone(),
            black_discs,
            white_discs,
            outcome: self.outcome(engine),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
