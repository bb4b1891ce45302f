//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either in the TUI (default) or a plain
//! line-based mode, and review statistics from past games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::TypedValueParser};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{load_statistics, run_simple},
    config::{DEFAULT_RESULTS, DEFAULT_WORDLIST, GameConfig},
    core::{DEFAULT_MAX_ATTEMPTS, MAX_ATTEMPTS_LIMIT},
    interactive::{App, run_tui},
    output::print_statistics,
    store::JsonFileStore,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: one line of comma-separated five-letter words
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST", default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Results history (JSON), created if missing
    #[arg(short, long, global = true, env = "WORDLE_RESULTS", default_value = DEFAULT_RESULTS)]
    results: PathBuf,

    /// Number of guesses per game
    #[arg(
        short = 'n',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u8).range(1..=MAX_ATTEMPTS_LIMIT as i64).map(usize::from)
    )]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per prompt, no TUI)
    Simple,

    /// Show statistics from past games
    Stats,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::new(&self.wordlist, &self.results).with_max_attempts(self.max_attempts)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    debug!(?config, "Resolved configuration");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&config),
        Commands::Stats => run_stats_command(&config),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let words = WordSource::from_file(&config.wordlist)
        .with_context(|| format!("loading word list {}", config.wordlist.display()))?;
    let store = JsonFileStore::open(&config.results)?;

    info!("Starting TUI");
    let app = App::new(&words, store, config.max_attempts)?;
    run_tui(app)
}

fn run_stats_command(config: &GameConfig) -> Result<()> {
    let stats = load_statistics(config)?;
    print_statistics(&stats);
    Ok(())
}
