//! Candidate word pool
//!
//! Owns the list of valid words for the process lifetime, validates guesses
//! against it and draws secrets that have not been played before.

mod error;
pub mod loader;

pub use error::{GuessError, PoolError};

use crate::core::WORD_LENGTH;
use crate::store::ResultStore;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// The pool of valid words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordSource {
    /// Build a pool from already-split words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Empty`] for an empty list and
    /// [`PoolError::InvalidWord`] if any word is not [`WORD_LENGTH`]
    /// lowercase letters.
    pub fn new<I, S>(words: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut index = FxHashSet::default();

        for word in words {
            let word = word.into();
            if !loader::is_valid_word(&word) {
                return Err(PoolError::InvalidWord {
                    word,
                    expected: WORD_LENGTH,
                });
            }
            if index.insert(word.clone()) {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(PoolError::Empty);
        }

        Ok(Self {
            words: ordered,
            index,
        })
    }

    /// Parse a comma-separated word line
    ///
    /// # Errors
    ///
    /// See [`loader::parse_line`] and [`WordSource::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordSource;
    ///
    /// let words = WordSource::parse("crane,slate,apple").unwrap();
    /// assert_eq!(words.len(), 3);
    /// assert!(words.contains("slate"));
    /// ```
    pub fn parse(line: &str) -> Result<Self, PoolError> {
        Self::new(loader::parse_line(line)?)
    }

    /// Load the pool from the first line of a word list file
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Io`] if the file can't be read, otherwise as
    /// [`WordSource::parse`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let source = Self::parse(&loader::read_first_line(path)?)?;
        info!(words = source.len(), "Loaded word list");
        Ok(source)
    }

    /// Load the pool and draw an unplayed secret in one step
    ///
    /// # Errors
    ///
    /// Any error of [`WordSource::from_file`] or [`WordSource::draw_secret`].
    pub fn load<P, S, R>(path: P, store: &S, rng: &mut R) -> Result<(Self, String), PoolError>
    where
        P: AsRef<Path>,
        S: ResultStore + ?Sized,
        R: Rng + ?Sized,
    {
        let source = Self::from_file(path)?;
        let secret = source.draw_secret(store, rng)?;
        Ok((source, secret))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Words not yet used as a secret, in pool order
    #[must_use]
    pub fn available(&self, used: &FxHashSet<String>) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| !used.contains(w.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Pick a secret uniformly from the words never played before
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Store`] if the history can't be read and
    /// [`PoolError::Exhausted`] if every word has been played.
    #[instrument(skip(self, store, rng))]
    pub fn draw_secret<S, R>(&self, store: &S, rng: &mut R) -> Result<String, PoolError>
    where
        S: ResultStore + ?Sized,
        R: Rng + ?Sized,
    {
        let used = store.load_secrets_used()?;
        let available = self.available(&used);
        debug!(
            total = self.len(),
            used = used.len(),
            available = available.len(),
            "Drawing secret"
        );

        available
            .choose(rng)
            .map(|&w| w.to_string())
            .ok_or(PoolError::Exhausted { total: self.len() })
    }

    /// Normalize and check a raw guess
    ///
    /// Returns the lowercased guess if it can be scored.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError`] for wrong length, non-letters, or words outside
    /// the pool, checked in that order.
    pub fn validate_guess(&self, raw: &str) -> Result<String, GuessError> {
        let guess = raw.trim().to_ascii_lowercase();

        let actual = guess.chars().count();
        if actual != WORD_LENGTH {
            return Err(GuessError::WrongLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        if !guess.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(GuessError::NonAlphabetic { guess });
        }

        if !self.contains(&guess) {
            return Err(GuessError::NotInWordList { guess });
        }

        Ok(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{GameRecord, MemoryStore, Outcome};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> WordSource {
        WordSource::parse("crane,slate,apple,speed,lymph").unwrap()
    }

    fn played(secrets: &[&str]) -> MemoryStore {
        MemoryStore::with_records(
            secrets
                .iter()
                .map(|s| GameRecord::today(*s, *s, Outcome::Won, 1))
                .collect(),
        )
    }

    #[test]
    fn parse_keeps_order_and_drops_duplicates() {
        let words = WordSource::parse("crane,slate,crane,apple").unwrap();
        assert_eq!(words.words(), ["crane", "slate", "apple"]);
        assert!(!words.is_empty());
    }

    #[test]
    fn empty_pool_is_invalid() {
        assert!(matches!(WordSource::parse(""), Err(PoolError::Empty)));
        assert!(matches!(
            WordSource::new(Vec::<String>::new()),
            Err(PoolError::Empty)
        ));
    }

    #[test]
    fn wrong_length_word_is_invalid() {
        assert!(matches!(
            WordSource::new(["crane", "cranes"]),
            Err(PoolError::InvalidWord { .. })
        ));
    }

    #[test]
    fn available_excludes_used_secrets() {
        let words = pool();
        let used: FxHashSet<String> = ["slate", "speed"].iter().map(ToString::to_string).collect();
        assert_eq!(words.available(&used), ["crane", "apple", "lymph"]);
    }

    #[test]
    fn draw_secret_never_repeats_played_words() {
        let words = pool();
        let store = played(&["crane", "slate", "apple"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let secret = words.draw_secret(&store, &mut rng).unwrap();
            assert!(secret == "speed" || secret == "lymph", "drew {secret}");
        }
    }

    #[test]
    fn draw_secret_covers_available_words() {
        let words = pool();
        let store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(42);

        let drawn: FxHashSet<String> = (0..200)
            .map(|_| words.draw_secret(&store, &mut rng).unwrap())
            .collect();
        assert_eq!(drawn.len(), words.len());
    }

    #[test]
    fn draw_secret_fails_when_exhausted() {
        let words = pool();
        let store = played(&["crane", "slate", "apple", "speed", "lymph"]);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            words.draw_secret(&store, &mut rng),
            Err(PoolError::Exhausted { total: 5 })
        ));
    }

    #[test]
    fn validate_guess_normalizes() {
        let words = pool();
        assert_eq!(words.validate_guess("  CRANE\n").unwrap(), "crane");
    }

    #[test]
    fn validate_guess_rejects_bad_input() {
        let words = pool();
        assert_eq!(
            words.validate_guess("cran"),
            Err(GuessError::WrongLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            words.validate_guess("cr4ne"),
            Err(GuessError::NonAlphabetic {
                guess: "cr4ne".to_string()
            })
        );
        assert_eq!(
            words.validate_guess("zzzzz"),
            Err(GuessError::NotInWordList {
                guess: "zzzzz".to_string()
            })
        );
    }

    #[test]
    fn load_reads_file_and_skips_played() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("wordlist.txt");
        std::fs::write(&path, "crane,slate,apple\nignored,second,line\n").unwrap();

        let store = played(&["crane", "apple"]);
        let mut rng = StdRng::seed_from_u64(11);
        let (words, secret) = WordSource::load(&path, &store, &mut rng).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(secret, "slate");
    }

    #[test]
    fn bundled_word_list_loads() {
        let words =
            WordSource::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist.txt")).unwrap();
        assert!(words.len() > 400);
        assert!(words.contains("crane"));
        assert!(words.words().iter().all(|w| loader::is_valid_word(w)));
    }

    #[test]
    fn validate_guess_counts_characters_not_bytes() {
        let words = pool();
        assert!(matches!(
            words.validate_guess("crâne"),
            Err(GuessError::NonAlphabetic { .. })
        ));
    }

    #[test]
    fn validate_guess_rejects_unicode_case_folding_to_ascii() {
        // KELVIN SIGN lowercases to an ASCII 'k' under Unicode rules
        let words = WordSource::parse("knelt,crane").unwrap();
        assert!(matches!(
            words.validate_guess("\u{212A}NELT"),
            Err(GuessError::NonAlphabetic { .. })
        ));
        assert_eq!(words.validate_guess("KNELT").unwrap(), "knelt");
    }
}
