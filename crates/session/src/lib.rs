//! Game orchestration on top of an `othello_core::Engine`.
//!
//! - `registry`: the named strategies and the Human sentinel
//! - `session`: the turn state machine for a single game
//! - `scheduler`: delayed, cancellable bot moves
//! - `history`: the per-game move log
//! - `config`: TOML session settings

pub mod config;
pub mod history;
pub mod registry;
pub mod scheduler;
pub mod session;

pub use config::{load_toml, ConfigError, SessionConfig};
pub use history::{HistoryEntry, HistoryLog, Notation, SKIP};
pub use registry::{PlayerAssignment, StrategyId, StrategyRegistry, UnknownStrategy, HUMAN};
pub use scheduler::{MoveScheduler, Ticket, DEFAULT_THINKING_DELAY};
pub use session::{Control, GameRecord, GameSession, Outcome, Phase};
