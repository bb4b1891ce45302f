//! A single guessed letter and its feedback colour

use std::fmt;

/// Feedback for one letter of a guess
///
/// Variants are ordered by how much they reveal, so `max` gives the best
/// colour seen for a letter across several guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Color {
    /// Not evaluated yet
    #[default]
    Unknown,
    /// Letter does not occur in the secret (beyond the copies already claimed)
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter is in the right position
    Correct,
}

impl Color {
    /// Emoji square used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Unknown => '⬛',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "white",
            Self::Absent => "gray",
            Self::Present => "yellow",
            Self::Correct => "green",
        };
        f.write_str(name)
    }
}

/// A guessed character with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    ch: char,
    color: Color,
}

impl Letter {
    /// Placeholder character used for rows that have not been guessed yet
    pub const BLANK: char = '_';

    #[must_use]
    pub const fn new(ch: char, color: Color) -> Self {
        Self { ch, color }
    }

    /// An unevaluated letter
    #[must_use]
    pub const fn unknown(ch: char) -> Self {
        Self::new(ch, Color::Unknown)
    }

    #[inline]
    #[must_use]
    pub const fn ch(self) -> char {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self::unknown(Self::BLANK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_order_by_information() {
        assert!(Color::Unknown < Color::Absent);
        assert!(Color::Absent < Color::Present);
        assert!(Color::Present < Color::Correct);
        assert_eq!(Color::Present.max(Color::Absent), Color::Present);
    }

    #[test]
    fn default_letter_is_blank_unknown() {
        let letter = Letter::default();
        assert_eq!(letter.ch(), '_');
        assert_eq!(letter.color(), Color::Unknown);
    }

    #[test]
    fn color_display_names() {
        assert_eq!(Color::Correct.to_string(), "green");
        assert_eq!(Color::Present.to_string(), "yellow");
        assert_eq!(Color::Absent.to_string(), "gray");
    }
}
