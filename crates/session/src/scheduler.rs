//! Delayed bot moves.
//!
//! A bot move is never played straight away: the scheduler holds one pending
//! ticket which fires once its deadline passes. Each ticket records the color
//! and session generation it was issued for, so a ticket that outlives its
//! game (restart, human seat swap) fires as a no-op.

use othello_core::{Color, Engine};
use std::time::{Duration, Instant};

use crate::registry::PlayerAssignment;
use crate::session::{Control, GameSession};

pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub due: Instant,
    pub color: Color,
    pub generation: u64,
}

#[derive(Debug)]
pub struct MoveScheduler {
    delay: Duration,
    pending: Option<Ticket>,
}

impl Default for MoveScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_THINKING_DELAY)
    }
}

impl MoveScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a ticket if `control` hands the turn to a bot. Any other
    /// control value clears the pending ticket.
    pub fn schedule(
        &mut self,
        session: &GameSession,
        control: Control,
        now: Instant,
    ) -> Option<Ticket> {
        self.pending = match control {
            Control::BotToMove(color) => Some(Ticket {
                due: now + self.delay,
                color,
                generation: session.generation(),
            }),
            Control::HumanToMove(_) | Control::GameOver => None,
        };
        self.pending
    }

    pub fn cancel(&mut self) -> Option<Ticket> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.map(|t| t.due)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.pending.is_some_and(|t| t.due <= now)
    }

    /// Fire the pending ticket if its deadline has passed.
    ///
    /// The ticket is consumed either way. It only plays if the session still
    /// matches what it was issued for; a follow-up bot turn is scheduled
    /// from `now`.
    pub fn poll<E: Engine + ?Sized>(
        &mut self,
        now: Instant,
        session: &mut GameSession,
        engine: &mut E,
    ) -> Option<Control> {
        if !self.is_due(now) {
            return None;
        }
        let ticket = self.pending.take()?;

        let still_valid = session.is_active()
            && session.turn() == ticket.color
            && session.generation() == ticket.generation
            && !session.assignment(ticket.color).is_human();
        if !still_valid {
            tracing::debug!(
                color = %ticket.color,
                generation = ticket.generation,
                current = session.generation(),
                "dropping stale bot ticket"
            );
            return None;
        }

        let control = session.run_bot_move(engine)?;
        self.schedule(session, control, now);
        Some(control)
    }

    /// Cancel whatever is pending, start a new game and schedule its first
    /// bot move if Black is a strategy.
    pub fn restart<E: Engine + ?Sized>(
        &mut self,
        session: &mut GameSession,
        engine: &mut E,
        black: PlayerAssignment,
        white: PlayerAssignment,
        now: Instant,
    ) -> Control {
        if let Some(ticket) = self.cancel() {
            tracing::debug!(color = %ticket.color, "restart cancelled pending bot move");
        }
        let control = session.start(engine, black, white);
        self.schedule(session, control, now);
        control
    }

    /// Submit a human move and schedule the reply if a bot is next.
    pub fn human_move<E: Engine + ?Sized>(
        &mut self,
        session: &mut GameSession,
        engine: &mut E,
        x: u8,
        y: u8,
        now: Instant,
    ) -> Option<Control> {
        let control = session.submit_human_move(engine, x, y)?;
        self.schedule(session, control, now);
        Some(control)
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
