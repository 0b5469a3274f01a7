//! Main application state and logic

use anyhow::{Context, Result};
use othello_core::{changed_cells, Color, Grid, LocalEngine};
use session::{
    Control, GameSession, MoveScheduler, Phase, PlayerAssignment, StrategyRegistry,
};
use std::fmt::Write as _;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::message::{Message, HELP};

/// What the input loop does after a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print this (possibly empty) text and keep going
    Continue(String),
    Quit,
}

/// Main application state
pub struct PlayApp {
    registry: StrategyRegistry,
    engine: LocalEngine,
    session: GameSession,
    scheduler: MoveScheduler,
    black: PlayerAssignment,
    white: PlayerAssignment,
    /// Board as last shown, for reporting what a ply changed
    shown: Grid,
    /// History entries already printed
    shown_plies: usize,
}

impl PlayApp {
    pub fn new(
        registry: StrategyRegistry,
        black: PlayerAssignment,
        white: PlayerAssignment,
        delay: Duration,
    ) -> Self {
        Self {
            registry,
            engine: LocalEngine::new(),
            session: GameSession::new(),
            scheduler: MoveScheduler::new(delay),
            black,
            white,
            shown: Grid::default(),
            shown_plies: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Deadline of the pending bot move, if any
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    /// Start a game with the current players.
    pub fn start(&mut self, now: Instant) -> String {
        let control = self.scheduler.restart(
            &mut self.session,
            &mut self.engine,
            self.black,
            self.white,
            now,
        );
        self.shown_plies = 0;
        let mut out = format!("New game: {} (B) vs {} (W)\n", self.black, self.white);
        out.push_str(&self.render(control));
        out
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Result<Flow> {
        let text = match message {
            Message::NewGame { black, white } => {
                let black = match black {
                    Some(name) => self.registry.assignment(&name)?,
                    None => self.black,
                };
                let white = match white {
                    Some(name) => self.registry.assignment(&name)?,
                    None => self.white,
                };
                self.black = black;
                self.white = white;
                self.start(now)
            }
            Message::Place(coord) => {
                match self
                    .scheduler
                    .human_move(&mut self.session, &mut self.engine, coord.x(), coord.y(), now)
                {
                    Some(control) => self.render(control),
                    None => self.rejected(coord.to_string()),
                }
            }
            Message::ShowBoard => format!("{}{}", self.session.board(&self.engine), self.status()),
            Message::ShowHistory => {
                let history = self.session.history();
                if history.is_empty() {
                    "No moves yet\n".to_string()
                } else {
                    history.transcript()
                }
            }
            Message::Save(path) => {
                self.save(&path)?;
                format!("Saved game to {}\n", path.display())
            }
            Message::ListPlayers => {
                let mut out = String::new();
                for choice in self.registry.choices() {
                    let _ = writeln!(out, "{choice}");
                }
                out
            }
            Message::Help => format!("{HELP}\n"),
            Message::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(text))
    }

    /// Fire the pending bot move once its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        let control = self.scheduler.poll(now, &mut self.session, &mut self.engine)?;
        Some(self.render(control))
    }

    /// Write the game record as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let record = self.session.record(&self.engine);
        let json = serde_json::to_string_pretty(&record)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    fn rejected(&self, mv: String) -> String {
        match self.session.phase() {
            Phase::GameOver => "Game over, type `new` to play again\n".to_string(),
            Phase::Idle => "No game running, type `new`\n".to_string(),
            Phase::AwaitingInput(color) if !self.session.assignment(color).is_human() => {
                format!("Wait for {} to move\n", self.session.assignment(color))
            }
            Phase::AwaitingInput(_) => format!("Illegal move {mv}\n"),
        }
    }

    /// Board after a ply, every ply since the last render (a move and the
    /// forced skips that followed it) and who is next.
    fn render(&mut self, control: Control) -> String {
        let grid = self.session.board(&self.engine);
        let changed = changed_cells(&self.shown, &grid);
        tracing::debug!(cells = changed.len(), "board changed");
        self.shown = grid;

        let mut out = String::new();
        let entries = self.session.history().entries();
        for entry in entries.iter().skip(self.shown_plies) {
            let _ = writeln!(out, "{entry}");
        }
        self.shown_plies = entries.len();
        let _ = write!(out, "{grid}");
        out.push_str(&self.describe(control));
        out
    }

    fn status(&self) -> String {
        self.describe(self.session.control())
    }

    fn describe(&self, control: Control) -> String {
        let (black, white) = self.session.score(&self.engine);
        let score = format!("Black {black} - White {white}");
        match control {
            Control::HumanToMove(color) => format!("{score}\n{} to move\n", name(color)),
            Control::BotToMove(color) => format!(
                "{score}\n{} ({}) is thinking...\n",
                name(color),
                self.session.assignment(color)
            ),
            Control::GameOver => {
                let outcome = self
                    .session
                    .outcome(&self.engine)
                    .map_or_else(|| "Game over".to_string(), |o| o.to_string());
                format!("{score}\n{outcome}\n")
            }
        }
    }
}

fn name(color: Color) -> &'static str {
    match color {
        Color::Black => "Black",
        Color::White => "White",
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
