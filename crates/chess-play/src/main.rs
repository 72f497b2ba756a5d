//! chess-play - play the minimax AI from a terminal.
//!
//! Reads moves such as `e2e4` from stdin and prints the board after every
//! move. The AI replies after a short pause.

mod command;
mod config;
mod console;
mod render;

use chess_core::Color;
use chess_engine::GameSession;
use clap::Parser;
use config::PlayConfig;
use console::Console;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

/// Play chess against a small minimax AI.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play chess against a small minimax AI")]
struct Args {
    /// Path to the TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth below each AI candidate move (1-6)
    #[arg(long)]
    depth: Option<u8>,

    /// Side you play
    #[arg(long, value_parser = parse_color)]
    human: Option<Color>,

    /// Log engine activity to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_name(s).ok_or_else(|| format!("expected 'white' or 'black', got '{}'", s))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let path = args.config.unwrap_or_else(PlayConfig::default_path);
    let mut config = PlayConfig::load(&path)?;
    if let Some(depth) = args.depth {
        config.session.search_depth = depth;
    }
    if let Some(human) = args.human {
        config.session.human = human;
    }
    config.validate()?;

    tracing::info!(
        human = %config.session.human,
        depth = config.session.search_depth,
        "starting game"
    );

    let stdin = std::io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        std::io::stdout(),
        GameSession::new(config.session),
        Duration::from_millis(config.ai_delay_ms),
    );
    console.run()?;

    tracing::info!(
        moves = console.session().move_history().len(),
        "session ended"
    );
    Ok(())
}
