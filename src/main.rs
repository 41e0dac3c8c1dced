//! Lexis - CLI
//!
//! Word-guessing game with a TUI (default) and a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexis::{
    commands::run_simple,
    config::{DEFAULT_ROWS, GameConfig},
    interactive::{App, run_tui},
};
use std::{fs::File, path::Path, sync::Arc};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lexis",
    about = "Guess the hidden word; letters are marked matched, misplaced or absent",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Answer to play against; repeat to pick randomly on each new game
    #[arg(short, long = "answer", global = true)]
    answers: Vec<String>,

    /// Log file (the TUI owns the terminal)
    #[arg(long, global = true, default_value = "lexis.log")]
    log_file: String,

    /// Log debug events (overridden by LEXIS_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(Path::new(&cli.log_file), cli.verbose)?;

    let config = GameConfig::new(cli.rows, cli.answers)?;
    tracing::info!(rows = config.rows(), cols = config.cols(), "configuration loaded");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(&config)?),
        Commands::Simple => run_simple(&config),
    }
}

/// Send tracing output to `path`, filtered by `LEXIS_LOG` when set
fn setup_logging(path: &Path, verbose: bool) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("LEXIS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("lexis={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
