//! Tournament CLI
//!
//! Run round robins or duels between the registered strategies and track
//! Elo ratings. Standings go to stdout, logs to stderr (`RUST_LOG`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use othello_core::LocalEngine;
use session::StrategyRegistry;
use std::path::{Path, PathBuf};
use tournament::{duel, EloTracker, TournamentConfig, TournamentRunner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tournament", about = "Elo tournament between the Othello strategies")]
struct Cli {
    /// TOML file with tournament settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every ordered pair once per round, standings printed after each round
    RoundRobin {
        /// Stop after this many rounds (default: run until interrupted)
        #[arg(long)]
        rounds: Option<u32>,
        /// Write standings JSON here after every round
        #[arg(long)]
        save: Option<PathBuf>,
        /// Start from the ratings in the save file if it exists
        #[arg(long)]
        resume: bool,
    },
    /// Repeated games between one ordered pair
    Duel {
        black: String,
        white: String,
        #[arg(long, short)]
        games: Option<u32>,
    },
    /// Print a saved standings file sorted by rating
    Leaderboard { path: Option<PathBuf> },
    /// List registered strategies in registration order
    List,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<TournamentConfig> {
    match path {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(TournamentConfig::default()),
    }
}

fn round_robin(
    config: &TournamentConfig,
    rounds: Option<u32>,
    save: Option<PathBuf>,
    resume: bool,
) -> Result<()> {
    let registry = config.registry()?;
    let rounds = rounds.or(config.rounds);
    let save = save.or_else(|| config.save.clone());

    let mut runner = TournamentRunner::new(registry);
    if let Some(path) = save.as_deref().filter(|p| resume && p.exists()) {
        let tracker = EloTracker::load(path)
            .with_context(|| format!("resuming from {}", path.display()))?;
        tracing::info!(path = %path.display(), "resuming standings");
        runner = runner.with_tracker(tracker);
    }

    let announce = |round: u32| println!("Running round {round}");
    runner.run(rounds, announce, |_, tracker| -> Result<()> {
        tracker.print_standings();
        if let Some(path) = &save {
            tracker
                .save(path)
                .with_context(|| format!("saving standings to {}", path.display()))?;
        }
        Ok(())
    })
}

fn run_duel(config: &TournamentConfig, black: &str, white: &str, games: Option<u32>) -> Result<()> {
    let registry = StrategyRegistry::standard();
    let black = registry.lookup(black)?;
    let white = registry.lookup(white)?;
    let games = games.unwrap_or(config.duel_games);

    let mut engine = LocalEngine::new();
    let result = duel(&mut engine, black, white, games);
    result.print_report();
    Ok(())
}

fn show_leaderboard(config: &TournamentConfig, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| config.standings_path());
    let tracker = EloTracker::load(&path)
        .with_context(|| format!("no standings at {}, run a tournament first", path.display()))?;
    tracker.print_leaderboard();
    Ok(())
}

fn list(config: &TournamentConfig) -> Result<()> {
    for name in config.registry()?.names() {
        println!("{name}");
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        None => round_robin(&config, None, None, false),
        Some(Command::RoundRobin {
            rounds,
            save,
            resume,
        }) => round_robin(&config, rounds, save, resume),
        Some(Command::Duel {
            black,
            white,
            games,
        }) => run_duel(&config, &black, &white, games),
        Some(Command::Leaderboard { path }) => show_leaderboard(&config, path),
        Some(Command::List) => list(&config),
    }
}
