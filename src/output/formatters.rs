//! Formatting utilities for terminal output

use crate::core::{Color, Word};
use colored::{ColoredString, Colorize};

/// A single board tile: the uppercase letter on its feedback colour
#[must_use]
pub fn tile(ch: char, color: Color) -> ColoredString {
    let text = format!(" {} ", ch.to_ascii_uppercase());
    match color {
        Color::Correct => text.black().on_green().bold(),
        Color::Present => text.black().on_yellow().bold(),
        Color::Absent => text.white().on_bright_black().bold(),
        Color::Unknown => text.bright_white().bold(),
    }
}

/// A full row of tiles
#[must_use]
pub fn format_row(row: &Word) -> String {
    row.cells().map(|(ch, color)| tile(ch, color).to_string()).collect()
}

/// Emoji grid for sharing, one line per guessed row
#[must_use]
pub fn share_grid(rows: &[Word]) -> String {
    rows.iter()
        .map(Word::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_grid_one_line_per_row() {
        let rows = [Word::scored(b"arose", b"crane"), Word::scored(b"crane", b"crane")];
        assert_eq!(share_grid(&rows), "🟨🟩⬜⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty() {
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn tile_contains_uppercase_letter() {
        colored::control::set_override(false);
        assert_eq!(tile('a', Color::Correct).to_string(), " A ");
        assert_eq!(format_row(&Word::blank()), " _ ".repeat(5));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
