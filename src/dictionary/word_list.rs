//! Word-list backed dictionary

use super::{Dictionary, Language};
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{DICTIONARY, WordListError};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A dictionary that recognizes exactly the words of one list in one language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: Language,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Words are stored lowercased. Surrounding whitespace is trimmed and blank
    /// entries are dropped.
    pub fn from_words<I, S>(words: I, language: Language) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { language, words }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, Language, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::embedded();
    /// assert!(dictionary.is_recognized_word("going", &Language::english()));
    /// assert!(!dictionary.is_recognized_word("gogin", &Language::english()));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY.iter().copied(), Language::english())
    }

    /// Load a dictionary from `path` tagged with `language`, or the embedded one
    ///
    /// The embedded dictionary is English whatever `language` says, so asking it
    /// for any other language recognizes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if `path` is given and cannot be read.
    pub fn load(path: Option<&Path>, language: Language) -> Result<Self, WordListError> {
        match path {
            Some(path) => Ok(Self::from_words(load_from_file(path)?, language)),
            None => Ok(Self::embedded()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every recognized word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized_word(&self, text: &str, language: &Language) -> bool {
        self.language.matches(language) && self.words.contains(&text.to_lowercase())
    }
}
