//! Shared test fixtures

use crate::dictionary::{Dictionary, Language};
use rustc_hash::FxHashSet;
use std::cell::Cell;

/// Deterministic in-memory dictionary that counts how often it is consulted
pub struct FakeDictionary {
    words: FxHashSet<String>,
    lookups: Cell<usize>,
}

impl FakeDictionary {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| (*w).to_string()).collect(),
            lookups: Cell::new(0),
        }
    }

    /// Recognizes every string
    pub fn permissive() -> Self {
        Self::new(&[])
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl Dictionary for FakeDictionary {
    fn is_recognized_word(&self, text: &str, _language: &Language) -> bool {
        self.lookups.set(self.lookups.get() + 1);
        self.words.is_empty() || self.words.contains(text)
    }
}

/// A dictionary that recognizes nothing
pub struct EmptyDictionary;

impl Dictionary for EmptyDictionary {
    fn is_recognized_word(&self, _text: &str, _language: &Language) -> bool {
        false
    }
}
