//! Game state
//!
//! The [`Board`] owns one session: the secret, the rows guessed so far and the
//! status. [`Statistics`] summarizes finished sessions from the history.

mod board;
mod error;
mod stats;

pub use board::{Board, Status, Turn};
pub use error::GameError;
pub use stats::Statistics;
