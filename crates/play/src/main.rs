//! Terminal Othello
//!
//! Reads commands from stdin, prints the board after every ply. Bot moves
//! are played after a short thinking delay while input stays responsive.

mod app;
mod message;

use anyhow::{Context, Result};
use app::{Flow, PlayApp};
use clap::Parser;
use message::Message;
use session::{SessionConfig, StrategyRegistry};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play Othello against the registered strategies")]
struct Cli {
    /// Player for Black: `Human` or a strategy name
    #[arg(long)]
    black: Option<String>,
    /// Player for White
    #[arg(long)]
    white: Option<String>,
    /// Bot thinking delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
    /// TOML file with session settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn build_app(cli: Cli) -> Result<PlayApp> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(black) = cli.black {
        config.black = black;
    }
    if let Some(white) = cli.white {
        config.white = white;
    }
    if let Some(ms) = cli.delay_ms {
        config.thinking_delay_ms = ms;
    }

    let registry = StrategyRegistry::standard();
    config.validate(&registry)?;
    let (black, white) = config.players(&registry)?;
    tracing::info!(%black, %white, delay_ms = config.thinking_delay_ms, "session configured");
    Ok(PlayApp::new(registry, black, white, config.thinking_delay()))
}

async fn run(mut app: PlayApp) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    emit(&app.start(std::time::Instant::now()))?;
    emit("Type `help` for commands\n")?;

    loop {
        let due = app.next_due();
        let wake = due.map_or_else(Instant::now, Instant::from_std);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let message = match line.parse::<Message>() {
                    Ok(message) => message,
                    Err(err) => {
                        emit(&format!("{err}\n"))?;
                        continue;
                    }
                };
                match app.update(message, std::time::Instant::now()) {
                    Ok(Flow::Continue(text)) => emit(&text)?,
                    Ok(Flow::Quit) => break,
                    Err(err) => emit(&format!("error: {err:#}\n"))?,
                }
            }
            _ = sleep_until(wake), if due.is_some() => {
                if let Some(text) = app.tick(std::time::Instant::now()) {
                    emit(&text)?;
                }
            }
        }
    }
    tracing::info!(plies = app.session().history().len(), "leaving");
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let app = build_app(Cli::parse())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()
        .context("building runtime")?;
    runtime.block_on(run(app))
}
