//! Root word analysis command
//!
//! Finds every dictionary word that can be built from a root word.

use crate::core::{RootWord, letter_count};
use crate::dictionary::{Dictionary, Language, WordListDictionary};
use crate::validation::rules::is_derivable;
use rayon::prelude::*;

/// Result of analyzing a root word
pub struct AnalysisResult {
    pub root: String,
    /// Derivable words, longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for submitting every derivable word once, in lowercase
    ///
    /// Case variants of stored raw text are distinct under the originality rule,
    /// so a session can score past this.
    pub max_score: usize,
    pub dictionary_size: usize,
}

/// List the dictionary words derivable from `root`
///
/// Only words the dictionary recognizes in `language` are kept, so the result
/// is exactly the set of submissions a session would accept.
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn analyze_root(
    root: &str,
    dictionary: &WordListDictionary,
    language: &Language,
) -> Result<AnalysisResult, String> {
    let root = root.trim();
    if root.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let root_word = RootWord::new(root);
    let candidates: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|&&word| is_derivable(word, &root_word))
        .filter(|&&word| dictionary.is_recognized_word(word, language))
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });

    let max_score = words.iter().map(|w| letter_count(w)).sum();

    Ok(AnalysisResult {
        root: root.to_string(),
        words,
        max_score,
        dictionary_size: dictionary.len(),
    })
}
