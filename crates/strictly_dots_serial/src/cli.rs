//! Command-line interface for strictly_dots_serial.

use clap::{Parser, Subcommand};

/// Dots and boxes over a serial-style text link
#[derive(Parser, Debug)]
#[command(name = "strictly_dots_serial")]
#[command(about = "Play dots and boxes by typing moves, one character at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game, reading moves from stdin (or a script) and writing to stdout
    Play {
        /// Board width in dots (2-5). Overrides the config file.
        #[arg(long)]
        width: Option<usize>,

        /// Board height in dots (2-5). Overrides the config file.
        #[arg(long)]
        height: Option<usize>,

        /// Path to a TOML file with a [board] table
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Feed this text instead of stdin, e.g. "00R 00D 01D 10R"
        #[arg(long)]
        script: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_overrides() {
        let cli = Cli::try_parse_from([
            "strictly_dots_serial",
            "play",
            "--width",
            "4",
            "--script",
            "00R",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                width,
                height,
                config,
                script,
            } => {
                assert_eq!(width, Some(4));
                assert_eq!(height, None);
                assert!(config.is_none());
                assert_eq!(script.as_deref(), Some("00R"));
            }
        }
    }
}
