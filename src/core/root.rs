//! Session root word

use super::LetterPool;
use std::fmt;

/// The word a session's submissions must be built from
///
/// Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord(String);

impl RootWord {
    /// Root used when the word list has nothing to offer
    pub const FALLBACK: &'static str = "potato";

    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The fallback root word
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(Self::FALLBACK)
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Fresh pool of the root's letters, lowercased
    #[must_use]
    pub fn letters(&self) -> LetterPool {
        LetterPool::new(&self.0)
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
