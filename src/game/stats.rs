//! Aggregate statistics over the results history

use crate::core::MAX_ATTEMPTS_LIMIT;
use crate::store::GameRecord;
use tracing::warn;

/// Summary of finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts; index 0 is unused
    pub guess_distribution: Vec<usize>,
    /// Consecutive wins ending with the most recent game
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Summarize records in the order they were appended
    #[must_use]
    pub fn from_records(records: &[GameRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.add(record);
        }
        stats
    }

    /// Fold one more finished game into the totals
    ///
    /// Records with an attempt count no game could produce are skipped.
    pub fn add(&mut self, record: &GameRecord) {
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&record.num_attempts) {
            warn!(
                secret = %record.actual_word,
                attempts = record.num_attempts,
                "Skipping history record with impossible attempt count"
            );
            return;
        }

        self.total_games += 1;

        if record.is_win() {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);

            let attempts = record.num_attempts;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Average attempts over won games
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .guess_distribution
            .iter()
            .enumerate()
            .map(|(attempts, count)| attempts * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }

    /// Wins that took exactly `attempts` guesses
    #[must_use]
    pub fn wins_in(&self, attempts: usize) -> usize {
        self.guess_distribution.get(attempts).copied().unwrap_or(0)
    }
}
