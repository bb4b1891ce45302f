//! Word list loading utilities
//!
//! Word list files hold a single line of comma-separated words, e.g.
//! `crane,slate,apple`.

use super::PoolError;
use crate::core::WORD_LENGTH;
use std::fs;
use std::path::Path;

/// Read the first line of a word list file
///
/// # Errors
///
/// Returns [`PoolError::Io`] if the file cannot be read.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String, PoolError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PoolError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().next().unwrap_or_default().to_string())
}

/// Split a comma-separated line into normalized words
///
/// Entries are trimmed and lowercased; empty entries (from a trailing comma or
/// blank line) are dropped.
///
/// # Errors
///
/// Returns [`PoolError::InvalidWord`] for the first entry that is not exactly
/// [`WORD_LENGTH`] ASCII letters.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_line;
///
/// let words = parse_line("crane, Slate,apple,").unwrap();
/// assert_eq!(words, ["crane", "slate", "apple"]);
///
/// assert!(parse_line("crane,toolong").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Vec<String>, PoolError> {
    line.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let word = entry.to_lowercase();
            if is_valid_word(&word) {
                Ok(word)
            } else {
                Err(PoolError::InvalidWord {
                    word,
                    expected: WORD_LENGTH,
                })
            }
        })
        .collect()
}

/// Exactly [`WORD_LENGTH`] lowercase ASCII letters
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_normalizes_entries() {
        let words = parse_line(" CRANE ,slate,\tirate\n").unwrap();
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_line_rejects_wrong_length() {
        let err = parse_line("crane,abc,slate").unwrap_err();
        assert!(matches!(err, PoolError::InvalidWord { ref word, expected: 5 } if word == "abc"));
    }

    #[test]
    fn parse_line_rejects_non_letters() {
        assert!(parse_line("cran3").is_err());
        assert!(parse_line("crâne").is_err());
    }

    #[test]
    fn parse_line_empty() {
        assert!(parse_line("").unwrap().is_empty());
        assert!(parse_line(" , ,").unwrap().is_empty());
    }

    #[test]
    fn read_first_line_missing_file() {
        let err = read_first_line("/definitely/not/here/wordlist.txt").unwrap_err();
        assert!(matches!(err, PoolError::Io { .. }));
    }
}
