//! Stored result of one finished game

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One entry of the results history
///
/// Field names are the on-disk JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// The secret word
    pub actual_word: String,
    /// The final guess of the game
    pub last_word_guessed: String,
    pub result: Outcome,
    pub num_attempts: usize,
    /// Day the game finished, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl GameRecord {
    /// Record for a game finishing today (local time)
    #[must_use]
    pub fn today(
        actual_word: impl Into<String>,
        last_word_guessed: impl Into<String>,
        result: Outcome,
        num_attempts: usize,
    ) -> Self {
        Self {
            actual_word: actual_word.into(),
            last_word_guessed: last_word_guessed.into(),
            result,
            num_attempts,
            date: chrono::Local::now().date_naive(),
        }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.result == Outcome::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_expected_keys() {
        let record = GameRecord {
            actual_word: "crane".to_string(),
            last_word_guessed: "crane".to_string(),
            result: Outcome::Won,
            num_attempts: 2,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["actual_word"], "crane");
        assert_eq!(json["last_word_guessed"], "crane");
        assert_eq!(json["result"], "won");
        assert_eq!(json["num_attempts"], 2);
        assert_eq!(json["date"], "2024-03-09");
    }

    #[test]
    fn parses_stored_entry() {
        let json = r#"{"actual_word": "apple", "last_word_guessed": "lymph",
            "result": "lost", "num_attempts": 6, "date": "2023-11-30"}"#;
        let record: GameRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.actual_word, "apple");
        assert_eq!(record.result, Outcome::Lost);
        assert!(!record.is_win());
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 11, 30).unwrap());
    }

    #[test]
    fn today_uses_current_date() {
        let record = GameRecord::today("crane", "arose", Outcome::Lost, 6);
        assert_eq!(record.date, chrono::Local::now().date_naive());
        assert_eq!(record.result.to_string(), "lost");
    }
}
