//! Keyboard hint tracker
//!
//! Remembers the most informative colour seen for each letter a-z. Used only
//! for display; scoring never reads it.

use super::feedback::letter_slot;
use super::{Color, Word};

/// Best colour seen per letter, indexed by `letter - 'a'`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alphabet {
    colors: [Color; 26],
}

impl Alphabet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored row into the tracker
    ///
    /// A letter's colour only ever moves up: a later gray never hides an
    /// earlier green for the same letter.
    pub fn record(&mut self, row: &Word) {
        for letter in row.letters() {
            let Ok(byte) = u8::try_from(letter.ch()) else {
                continue;
            };
            if let Some(slot) = letter_slot(byte) {
                self.colors[slot] = self.colors[slot].max(letter.color());
            }
        }
    }

    /// Colour for `ch`, `Unknown` for anything outside a-z
    #[must_use]
    pub fn color_of(&self, ch: char) -> Color {
        u8::try_from(ch)
            .ok()
            .and_then(letter_slot)
            .map_or(Color::Unknown, |slot| self.colors[slot])
    }

    /// `(letter, colour)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Color)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.colors.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.iter().count(), 26);
        assert!(alphabet.iter().all(|(_, c)| c == Color::Unknown));
    }

    #[test]
    fn records_row_colors() {
        let mut alphabet = Alphabet::new();
        alphabet.record(&Word::scored(b"arose", b"crane"));

        assert_eq!(alphabet.color_of('a'), Color::Present);
        assert_eq!(alphabet.color_of('r'), Color::Correct);
        assert_eq!(alphabet.color_of('o'), Color::Absent);
        assert_eq!(alphabet.color_of('e'), Color::Correct);
        assert_eq!(alphabet.color_of('z'), Color::Unknown);
    }

    #[test]
    fn keeps_best_color() {
        let mut alphabet = Alphabet::new();
        alphabet.record(&Word::scored(b"crane", b"crane"));
        // Second E is gray here but E was already green
        alphabet.record(&Word::scored(b"eerie", b"crane"));

        assert_eq!(alphabet.color_of('e'), Color::Correct);
        assert_eq!(alphabet.color_of('i'), Color::Absent);
    }

    #[test]
    fn blank_rows_are_ignored() {
        let mut alphabet = Alphabet::new();
        alphabet.record(&Word::blank());
        assert_eq!(alphabet, Alphabet::new());
        assert_eq!(alphabet.color_of('_'), Color::Unknown);
    }
}
