//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A word list resource that could not be read
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list {} could not be read", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a file, one per line
///
/// Lines are trimmed and blank lines skipped. An empty file is not an error; a
/// missing or unreadable one is.
///
/// # Errors
///
/// Returns [`WordListError::Unreadable`] if the file cannot be opened or is not
/// valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_text(&content))
}

/// Split newline-delimited text into trimmed, non-blank words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("outgoing\n\n  notebook  \r\nsilkworm\n");
        assert_eq!(words, vec!["outgoing", "notebook", "silkworm"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["absolute", "blankets"]);
        assert_eq!(words, vec!["absolute", "blankets"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let err = load_from_file("/definitely/not/here/start.txt").unwrap_err();
        assert!(matches!(err, WordListError::Unreadable { .. }));
        assert!(err.to_string().contains("start.txt"));
    }

    #[test]
    fn load_from_embedded_source_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/start.txt");
        let words = load_from_file(path).unwrap();
        assert_eq!(words.len(), crate::wordlists::START_WORDS_COUNT);
    }
}
