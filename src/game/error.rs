//! Board error types.

use super::Status;
use crate::wordlists::GuessError;
use derive_more::{Display, Error};

/// A guess the board could not take.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The guess was rejected; ask the player again.
    #[display("invalid guess: {source}")]
    InvalidGuess {
        /// Why the guess was rejected.
        source: GuessError,
    },
    /// The game is already over. Drivers must not submit guesses after a
    /// terminal status.
    #[display("game is already {status}, no more guesses accepted")]
    InvalidState {
        /// Status the board is stuck in.
        status: Status,
    },
}

impl From<GuessError> for GameError {
    fn from(source: GuessError) -> Self {
        Self::InvalidGuess { source }
    }
}
