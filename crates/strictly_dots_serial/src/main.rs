//! strictly_dots_serial - play dots and boxes over a text link.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;
use strictly_dots_serial::{Cli, Command, GameConfig, Session, StreamLink};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr; stdout is the link.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play {
            width,
            height,
            config,
            script,
        } => run_play(width, height, config, script),
    }
}

/// Play one game on stdin/stdout, or on a scripted input.
#[instrument(skip(script))]
fn run_play(
    width: Option<usize>,
    height: Option<usize>,
    config: Option<PathBuf>,
    script: Option<String>,
) -> Result<()> {
    let settings = match config {
        Some(path) => GameConfig::from_file(&path)?,
        None => GameConfig::default(),
    };
    let board = settings.with_overrides(width, height)?;
    info!(%board, "Board confirmed");

    let reader: Box<dyn Read> = match script {
        Some(text) => Box::new(Cursor::new(text.into_bytes())),
        None => Box::new(io::stdin()),
    };
    let link = StreamLink::new(reader, io::stdout());

    let mut session = Session::new(board, link);
    match session.run()? {
        Some(outcome) => info!(%outcome, "Session complete"),
        None => info!("Session ended before the last line was drawn"),
    }
    Ok(())
}
