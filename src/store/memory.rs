//! In-memory results history

use super::{GameRecord, ResultStore, StoreError};

/// History kept in a `Vec`, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<GameRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing history
    #[must_use]
    pub const fn with_records(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }
}

impl ResultStore for MemoryStore {
    fn append(&mut self, record: &GameRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn load_records(&self) -> Result<Vec<GameRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
