//! Runtime configuration
//!
//! Paths and limits are resolved once (by the CLI) and handed to the word
//! source and the results store; nothing below reads the environment or the
//! working directory on its own.

use crate::core::DEFAULT_MAX_ATTEMPTS;
use std::path::PathBuf;

/// Default location of the candidate word list
pub const DEFAULT_WORDLIST: &str = "data/wordlist.txt";

/// Default location of the results history
pub const DEFAULT_RESULTS: &str = "data/attempts.json";

/// Where to find the word list and history, and how many guesses to allow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub wordlist: PathBuf,
    pub results: PathBuf,
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub fn new(wordlist: impl Into<PathBuf>, results: impl Into<PathBuf>) -> Self {
        Self {
            wordlist: wordlist.into(),
            results: results.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORDLIST, DEFAULT_RESULTS)
    }
}
