//! Tournament runner for the registered Othello strategies
//!
//! This crate provides infrastructure for:
//! - Round-robin tournaments over every ordered pair of strategies
//! - Elo tracking across rounds, with JSON standings files
//! - Repeated duels between two strategies
//!
//! # Usage
//!
//! ```bash
//! # Unbounded round robin, printing standings after every round
//! cargo run -p tournament
//!
//! # Ten rounds, standings saved after each
//! cargo run -p tournament -- round-robin --rounds 10 --save standings.json
//!
//! # One ordered pair, 100 games
//! cargo run -p tournament -- duel "Deep Heuristic Bot" "Random Bot" --games 100
//! ```

mod config;
mod elo;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use match_runner::*;
pub use results::*;
