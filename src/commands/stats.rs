//! History statistics command

use crate::config::GameConfig;
use crate::game::Statistics;
use crate::store::{JsonFileStore, ResultStore};
use anyhow::Result;

/// Load the results history and summarize it
///
/// # Errors
///
/// Returns an error if the results file cannot be opened or parsed.
pub fn load_statistics(config: &GameConfig) -> Result<Statistics> {
    let store = JsonFileStore::open(&config.results)?;
    Ok(Statistics::from_records(&store.load_records()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{GameRecord, Outcome};

    #[test]
    fn statistics_from_results_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let results = dir.path().join("attempts.json");
        let mut store = JsonFileStore::open(&results).unwrap();
        store
            .append(&GameRecord::today("crane", "crane", Outcome::Won, 4))
            .unwrap();
        store
            .append(&GameRecord::today("apple", "lymph", Outcome::Lost, 6))
            .unwrap();

        let config = GameConfig::new("unused.txt", &results);
        let stats = load_statistics(&config).unwrap();
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.wins_in(4), 1);
    }

    #[test]
    fn hand_edited_attempt_count_does_not_crash() {
        let dir = tempfile::TempDir::new().unwrap();
        let results = dir.path().join("attempts.json");
        std::fs::write(
            &results,
            r#"[
                {"actual_word":"crane","last_word_guessed":"crane","result":"won","num_attempts":18446744073709551615,"date":"2024-03-09"},
                {"actual_word":"apple","last_word_guessed":"apple","result":"won","num_attempts":3,"date":"2024-03-10"}
            ]"#,
        )
        .unwrap();

        let stats = load_statistics(&GameConfig::new("unused.txt", &results)).unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.wins_in(3), 1);
    }
}
