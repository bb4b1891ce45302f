//! Persistent game history
//!
//! The history is append-only: one [`GameRecord`] per finished game. Word
//! selection reads it to avoid repeating secrets, the board writes to it when
//! a game ends.

mod error;
mod json;
mod memory;
mod record;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{GameRecord, Outcome};

use rustc_hash::FxHashSet;

/// Append-only store of finished games
pub trait ResultStore {
    /// Durably append one record
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record could not be written.
    fn append(&mut self, record: &GameRecord) -> Result<(), StoreError>;

    /// Every record appended so far, oldest first
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history could not be read.
    fn load_records(&self) -> Result<Vec<GameRecord>, StoreError>;

    /// Secrets of all previous games
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history could not be read.
    fn load_secrets_used(&self) -> Result<FxHashSet<String>, StoreError> {
        Ok(self
            .load_records()?
            .into_iter()
            .map(|record| record.actual_word)
            .collect())
    }
}
