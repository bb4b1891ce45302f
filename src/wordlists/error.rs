//! Word pool and guess validation errors.

use crate::store::StoreError;
use derive_more::{Display, Error};
use std::path::PathBuf;

/// A guess the board refuses to score. The player should be asked again;
/// no attempt is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// Wrong number of letters.
    #[display("guess must be exactly {expected} letters, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected guess.
        actual: usize,
    },
    /// Contains something other than a-z.
    #[display("guess '{guess}' must contain only letters a-z")]
    NonAlphabetic {
        /// The rejected guess.
        guess: String,
    },
    /// Well formed but not a word we know.
    #[display("'{guess}' is not in the word list")]
    NotInWordList {
        /// The rejected guess.
        guess: String,
    },
}

/// The candidate pool cannot supply a secret. No game can start.
#[derive(Debug, Display, Error)]
pub enum PoolError {
    /// Word list file could not be read.
    #[display("failed to read word list {}: {source}", path.display())]
    Io {
        /// Word list file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Word list contains no words.
    #[display("word list is empty")]
    Empty,
    /// Word list contains an entry of the wrong shape.
    #[display("word list entry '{word}' is not {expected} lowercase letters")]
    InvalidWord {
        /// Offending entry.
        word: String,
        /// Required length.
        expected: usize,
    },
    /// Every candidate has already been used as a secret.
    #[display("all {total} words have already been played")]
    Exhausted {
        /// Size of the candidate pool.
        total: usize,
    },
    /// Requested secret is not in the candidate pool.
    #[display("secret '{word}' is not in the word list")]
    UnknownSecret {
        /// Requested secret.
        word: String,
    },
    /// Previous secrets could not be read from the history.
    #[display("failed to read previous games: {source}")]
    Store {
        /// Underlying store error.
        source: StoreError,
    },
}

impl From<StoreError> for PoolError {
    fn from(source: StoreError) -> Self {
        Self::Store { source }
    }
}
