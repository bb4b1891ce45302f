//! Wordle guess row representation
//!
//! A Word is one row of the board: the guessed letters plus the feedback each
//! one received. Unplayed rows are blank placeholders.

use super::{Color, Letter, WORD_LENGTH, score};
use std::fmt;

/// One row of the board
///
/// Rows are built either blank or fully scored; there is no way to change a
/// letter's colour afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [Letter; WORD_LENGTH],
}

impl Word {
    /// Placeholder row shown before a guess fills it
    #[must_use]
    pub fn blank() -> Self {
        Self {
            letters: [Letter::default(); WORD_LENGTH],
        }
    }

    /// Score `guess` against `secret` and build the coloured row
    ///
    /// Both words are expected to be lowercase ASCII; see [`score`].
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Color, Word};
    ///
    /// let row = Word::scored(b"arose", b"crane");
    /// assert_eq!(row.text(), "arose");
    /// assert_eq!(row.letters()[1].color(), Color::Correct);
    /// assert!(!row.is_solved());
    /// ```
    #[must_use]
    pub fn scored(guess: &[u8; WORD_LENGTH], secret: &[u8; WORD_LENGTH]) -> Self {
        let colors = score(guess, secret);
        let mut letters = [Letter::default(); WORD_LENGTH];
        for ((slot, &byte), color) in letters.iter_mut().zip(guess).zip(colors) {
            *slot = Letter::new(char::from(byte), color);
        }
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// `(char, colour)` pairs for rendering
    pub fn cells(&self) -> impl Iterator<Item = (char, Color)> + '_ {
        self.letters.iter().map(|l| (l.ch(), l.color()))
    }

    /// The guessed characters, or underscores for a blank row
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.ch()).collect()
    }

    /// True for a placeholder row
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.letters.iter().all(|l| l.color() == Color::Unknown)
    }

    /// True when every letter is in the right place
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(|l| l.color() == Color::Correct)
    }

    /// Share string such as "🟨🟩⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.color().emoji()).collect()
    }
}

impl Default for Word {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.ch())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_row() {
        let row = Word::blank();
        assert!(row.is_blank());
        assert!(!row.is_solved());
        assert_eq!(row.text(), "_____");
        assert_eq!(row, Word::default());
    }

    #[test]
    fn scored_row_keeps_guess_order() {
        let row = Word::scored(b"speed", b"erase");
        assert_eq!(row.text(), "speed");
        assert_eq!(format!("{row}"), "speed");

        let cells: Vec<(char, Color)> = row.cells().collect();
        assert_eq!(
            cells,
            vec![
                ('s', Color::Present),
                ('p', Color::Absent),
                ('e', Color::Present),
                ('e', Color::Present),
                ('d', Color::Absent),
            ]
        );
    }

    #[test]
    fn solved_row() {
        let row = Word::scored(b"crane", b"crane");
        assert!(row.is_solved());
        assert!(!row.is_blank());
        assert_eq!(row.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_for_mixed_row() {
        let row = Word::scored(b"arose", b"crane");
        assert_eq!(row.to_emoji(), "🟨🟩⬜⬜🟩");
    }
}
