//! Core domain types for Wordle
//!
//! Letters, guess rows, the alphabet hint tracker and the feedback scoring
//! function. Nothing in here touches the filesystem or the terminal.

mod alphabet;
mod feedback;
mod letter;
mod word;

pub use alphabet::Alphabet;
pub use feedback::score;
pub use letter::{Color, Letter};
pub use word::Word;

/// Number of letters in every guess and secret
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest configurable number of guesses per game
pub const MAX_ATTEMPTS_LIMIT: usize = 26;
