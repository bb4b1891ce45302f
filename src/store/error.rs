//! Persistence error types.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// Failure reading or writing the results history.
#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[display("failed to {action} results file {}: {source}", path.display())]
    Io {
        /// What was being attempted, e.g. "read".
        action: &'static str,
        /// File involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The history could not be encoded or decoded as JSON.
    #[display("results file {} is not valid JSON: {source}", path.display())]
    Serialization {
        /// File involved.
        path: PathBuf,
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// Another process held the lock for too long.
    #[display("results file {} is locked by another process (lock file {})", path.display(), lock.display())]
    Locked {
        /// File involved.
        path: PathBuf,
        /// Lock file that could not be acquired.
        lock: PathBuf,
    },
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
