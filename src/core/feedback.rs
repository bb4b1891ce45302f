//! Guess scoring
//!
//! Colours a guess against the secret following Wordle's rules, including
//! proper handling of duplicate letters.

use super::{Color, WORD_LENGTH};

/// Index of a lowercase ASCII letter in a 26-slot table
#[inline]
pub(crate) const fn letter_slot(byte: u8) -> Option<usize> {
    if byte.is_ascii_lowercase() {
        Some((byte - b'a') as usize)
    } else {
        None
    }
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. Count every letter of the secret.
/// 2. First pass: mark exact position matches `Correct` and take them out of
///    the counts. This pass covers every position before the second starts.
/// 3. Second pass, left to right over the remaining positions: `Present`
///    while copies of the letter are left, `Absent` otherwise.
///
/// Bytes outside `a..=z` never match anything but themselves in place.
///
/// # Examples
/// ```
/// use wordle_game::core::{Color, score};
///
/// let colors = score(b"robot", b"floor");
/// assert_eq!(
///     colors,
///     [Color::Present, Color::Present, Color::Absent, Color::Correct, Color::Absent]
/// );
/// ```
#[must_use]
pub fn score(guess: &[u8; WORD_LENGTH], secret: &[u8; WORD_LENGTH]) -> [Color; WORD_LENGTH] {
    let mut colors = [Color::Absent; WORD_LENGTH];
    let mut remaining = [0u8; 26];

    for &byte in secret {
        if let Some(slot) = letter_slot(byte) {
            remaining[slot] += 1;
        }
    }

    // Greens claim their copies first
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            colors[i] = Color::Correct;
            if let Some(slot) = letter_slot(g) {
                remaining[slot] -= 1;
            }
        }
    }

    for (i, &g) in guess.iter().enumerate() {
        if colors[i] == Color::Correct {
            continue;
        }
        if let Some(slot) = letter_slot(g)
            && remaining[slot] > 0
        {
            colors[i] = Color::Present;
            remaining[slot] -= 1;
        }
    }

    colors
}
