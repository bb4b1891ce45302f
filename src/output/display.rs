//! Display functions for the line-based game

use super::formatters::{create_progress_bar, format_row, share_grid, tile};
use crate::core::{Alphabet, Color};
use crate::game::{Board, Statistics, Status};
use crate::store::ResultStore;
use colored::Colorize;

/// Print every row of the board, blanks included
pub fn print_board<S: ResultStore>(board: &Board<'_, S>) {
    println!();
    for row in board.rows() {
        println!("   {}", format_row(row));
    }
    println!();
}

/// Print the a-z keyboard hint line
pub fn print_alphabet(alphabet: &Alphabet) {
    let line: String = alphabet
        .iter()
        .map(|(ch, color)| match color {
            Color::Unknown => ch.to_ascii_uppercase().to_string().normal().to_string(),
            Color::Absent => ch.to_ascii_uppercase().to_string().bright_black().to_string(),
            _ => tile(ch, color).to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("   {line}\n");
}

/// Print the end-of-game banner with the secret and share grid
pub fn print_game_over<S: ResultStore>(board: &Board<'_, S>) {
    let secret = board.revealed_secret().unwrap_or_default().to_uppercase();
    let attempts = board.attempts_used();

    println!("{}", "═".repeat(60).bright_cyan());
    match board.status() {
        Status::Won => {
            let plural = if attempts == 1 { "" } else { "s" };
            println!(
                "{}",
                format!("🎉 Well done! You guessed {secret} in {attempts} attempt{plural}.")
                    .bright_green()
                    .bold()
            );
        }
        Status::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses! The word was".red().bold(),
                secret.bright_yellow().bold()
            );
        }
        Status::Ongoing => {}
    }
    println!(
        "\n{}/{}\n{}",
        if board.status() == Status::Won {
            attempts.to_string()
        } else {
            "X".to_string()
        },
        board.max_attempts(),
        share_grid(board.filled_rows())
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a summary of the results history
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    if let Some(average) = stats.average_attempts() {
        println!("   Average guesses: {average:.2}");
    }
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    if stats.games_won == 0 {
        return;
    }

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 40);
        println!("   {attempts}: {} {count:4}", bar.green());
    }
}
