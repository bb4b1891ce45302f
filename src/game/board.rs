//! Board state and the guess state machine

use super::GameError;
use crate::core::{Alphabet, WORD_LENGTH, Word};
use crate::store::{GameRecord, Outcome, ResultStore, StoreError};
use crate::wordlists::{GuessError, PoolError, WordSource};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Where a session stands
///
/// `Won` and `Lost` are terminal: once reached the board never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ongoing,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }

    /// Stored outcome for a terminal status
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Ongoing => None,
            Self::Won => Some(Outcome::Won),
            Self::Lost => Some(Outcome::Lost),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ongoing => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Result of one accepted guess
#[derive(Debug)]
pub struct Turn {
    /// The scored row, as stored on the board
    pub row: Word,
    /// Board status after the guess
    pub status: Status,
    /// `None` while the game goes on. On the final guess, the record written
    /// to the history or the reason it could not be written. A failed write
    /// does not change `status`.
    pub saved: Option<Result<GameRecord, StoreError>>,
}

/// One game session
///
/// Holds the secret, `max_attempts` rows (blank until guessed), the attempt
/// counter and the status, plus the store that receives the result when the
/// game ends.
#[derive(Debug)]
pub struct Board<'a, S: ResultStore> {
    words: &'a WordSource,
    store: S,
    secret: String,
    secret_bytes: [u8; WORD_LENGTH],
    rows: Vec<Word>,
    attempts_used: usize,
    status: Status,
    alphabet: Alphabet,
}

impl<'a, S: ResultStore> Board<'a, S> {
    /// Start a game with a secret nobody has played yet
    ///
    /// `max_attempts` is raised to at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] if no unplayed secret can be drawn.
    pub fn start<R: Rng + ?Sized>(
        words: &'a WordSource,
        store: S,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, PoolError> {
        let secret = words.draw_secret(&store, rng)?;
        Self::with_secret(words, store, &secret, max_attempts)
    }

    /// Start a game with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::UnknownSecret`] if `secret` is not in the pool.
    #[instrument(skip(words, store, secret))]
    pub fn with_secret(
        words: &'a WordSource,
        store: S,
        secret: &str,
        max_attempts: usize,
    ) -> Result<Self, PoolError> {
        let unknown = || PoolError::UnknownSecret {
            word: secret.to_string(),
        };
        if !words.contains(secret) {
            return Err(unknown());
        }
        let secret_bytes = <[u8; WORD_LENGTH]>::try_from(secret.as_bytes()).map_err(|_| unknown())?;

        let max_attempts = max_attempts.max(1);
        info!(max_attempts, "New game started");

        Ok(Self {
            words,
            store,
            secret: secret.to_string(),
            secret_bytes,
            rows: vec![Word::blank(); max_attempts],
            attempts_used: 0,
            status: Status::Ongoing,
            alphabet: Alphabet::new(),
        })
    }

    /// Score a guess and advance the game
    ///
    /// On the guess that ends the game the result is appended to the store
    /// before returning.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidState`] if the game is already over
    /// - [`GameError::InvalidGuess`] if the guess has the wrong length,
    ///   contains non-letters or is not in the word list. No attempt is used.
    #[instrument(skip(self), fields(attempt = self.attempts_used + 1))]
    pub fn evaluate(&mut self, guess: &str) -> Result<Turn, GameError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Guess submitted after game end");
            return Err(GameError::InvalidState {
                status: self.status,
            });
        }

        let guess = self.words.validate_guess(guess)?;
        let bytes = <[u8; WORD_LENGTH]>::try_from(guess.as_bytes()).map_err(|_| {
            GuessError::WrongLength {
                expected: WORD_LENGTH,
                actual: guess.len(),
            }
        })?;

        let row = Word::scored(&bytes, &self.secret_bytes);
        self.rows[self.attempts_used] = row;
        self.attempts_used += 1;
        self.alphabet.record(&row);
        self.status = self.next_status(&guess);
        debug!(row = %row.to_emoji(), status = %self.status, "Guess scored");

        let saved = self.status.outcome().map(|outcome| self.persist(outcome, &guess));

        Ok(Turn {
            row,
            status: self.status,
            saved,
        })
    }

    fn next_status(&self, guess: &str) -> Status {
        if guess == self.secret {
            Status::Won
        } else if self.attempts_used == self.max_attempts() {
            Status::Lost
        } else {
            Status::Ongoing
        }
    }

    fn persist(&mut self, outcome: Outcome, last_guess: &str) -> Result<GameRecord, StoreError> {
        let record = GameRecord::today(&*self.secret, last_guess, outcome, self.attempts_used);
        match self.store.append(&record) {
            Ok(()) => {
                info!(result = %outcome, attempts = self.attempts_used, "Game finished");
                Ok(record)
            }
            Err(e) => {
                warn!(error = %e, result = %outcome, "Game finished but result was not saved");
                Err(e)
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// All rows, blank placeholders included
    #[must_use]
    pub fn rows(&self) -> &[Word] {
        &self.rows
    }

    /// Only the rows that have been guessed
    #[must_use]
    pub fn filled_rows(&self) -> &[Word] {
        &self.rows[..self.attempts_used]
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Word> {
        self.filled_rows().last()
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts() - self.attempts_used
    }

    /// Best colour seen per letter, for keyboard hints
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        self.status.is_terminal().then_some(self.secret.as_str())
    }

    #[must_use]
    pub const fn words(&self) -> &'a WordSource {
        self.words
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
