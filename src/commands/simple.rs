//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per prompt.

use crate::config::GameConfig;
use crate::game::{Board, GameError, Turn};
use crate::output::{print_alphabet, print_board, print_game_over};
use crate::store::{JsonFileStore, ResultStore};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use tracing::info;

/// Run the line-based game until the player quits
///
/// # Errors
///
/// Returns an error if the word list or results file cannot be opened, if no
/// unplayed word is left, or on an I/O error reading input.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let words = WordSource::from_file(&config.wordlist)
        .with_context(|| format!("loading word list {}", config.wordlist.display()))?;
    let store = JsonFileStore::open(&config.results)?;
    let mut rng = rand::rng();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. Type 'quit' to exit.",
        crate::core::WORD_LENGTH,
        config.max_attempts
    );

    loop {
        let mut board = Board::start(&words, store.clone(), config.max_attempts, &mut rng)?;

        if !play_game(&mut board)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match get_user_input("Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Drive one board to the end
///
/// Returns `false` if the player quit before the game finished.
fn play_game<S: ResultStore>(board: &mut Board<'_, S>) -> Result<bool> {
    while !board.is_over() {
        print_board(board);
        print_alphabet(board.alphabet());

        let prompt = format!(
            "Enter your guess ({}/{})",
            board.attempts_used() + 1,
            board.max_attempts()
        );
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(false);
        };
        if matches!(input.as_str(), "quit" | "q" | "exit") {
            info!(attempts = board.attempts_used(), "Game abandoned");
            return Ok(false);
        }

        match board.evaluate(&input) {
            Ok(turn) => report_save(&turn),
            Err(GameError::InvalidGuess { source }) => {
                println!("{}", format!("❌ {source}").red());
            }
            Err(e @ GameError::InvalidState { .. }) => return Err(e.into()),
        }
    }

    print_board(board);
    print_game_over(board);
    Ok(true)
}

fn report_save(turn: &Turn) {
    if let Some(Err(e)) = &turn.saved {
        eprintln!(
            "{} {e}",
            "⚠ Could not save the result:".yellow().bold()
        );
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}
