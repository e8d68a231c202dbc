//! Letter multiset for the derivability rule
//!
//! A LetterPool holds the letters of a root word that are still available.
//! Spelling a candidate consumes one occurrence per letter, left to right.
//! A letter is a grapheme cluster, so `e` followed by a combining accent is one
//! letter, distinct from a plain `e`.

use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Number of letters (grapheme clusters) in `text`
///
/// # Examples
/// ```
/// use word_scramble::core::letter_count;
///
/// assert_eq!(letter_count("going"), 5);
/// assert_eq!(letter_count("cafe\u{301}"), 4);
/// ```
#[must_use]
pub fn letter_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Remaining letters of a lowercased root word, with multiplicity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<String, usize>,
}

impl LetterPool {
    /// Build a pool from a lowercased copy of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("Outgoing");
    /// assert_eq!(pool.remaining("o"), 2);
    /// assert_eq!(pool.remaining("n"), 1);
    /// assert_eq!(pool.remaining("z"), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for letter in word.to_lowercase().graphemes(true) {
            *counts.entry(letter.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Take one occurrence of `letter` out of the pool
    ///
    /// Returns `false` and leaves the pool untouched if none is left.
    pub fn consume(&mut self, letter: &str) -> bool {
        match self.counts.get_mut(letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Consume every letter of `word` in order
    ///
    /// Stops at the first letter that has no remaining occurrence. Letters
    /// consumed before the failure stay consumed.
    pub fn consume_all(&mut self, word: &str) -> bool {
        word.graphemes(true).all(|letter| self.consume(letter))
    }

    /// Whether `word` can be spelled from this pool without reusing a letter
    ///
    /// The pool itself is not modified.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.clone().consume_all(word)
    }

    /// Occurrences of `letter` still available
    #[inline]
    #[must_use]
    pub fn remaining(&self, letter: &str) -> usize {
        self.counts.get(letter).copied().unwrap_or(0)
    }

    /// Total number of letters still available
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether every letter has been consumed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
