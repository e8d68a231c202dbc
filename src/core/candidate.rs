//! Submitted word representation
//!
//! A Candidate keeps the text exactly as the player typed it next to the
//! normalized form every rule is checked against.

use super::letter_count;
use std::fmt;

/// A non-empty player submission
///
/// The normalized form is lowercased with surrounding whitespace and newlines
/// trimmed. The raw form is what ends up in the used-word history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    raw: String,
    normalized: String,
}

impl Candidate {
    /// Normalize a raw submission
    ///
    /// Returns `None` when nothing is left after trimming, which callers treat as
    /// a silent no-op rather than a rejection.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::normalize("  Going\n").unwrap();
    /// assert_eq!(candidate.text(), "going");
    /// assert_eq!(candidate.raw(), "  Going\n");
    ///
    /// assert!(Candidate::normalize(" \t\n").is_none());
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let normalized = raw.to_lowercase().trim().to_string();

        if normalized.is_empty() {
            return None;
        }

        Some(Self {
            raw: raw.to_string(),
            normalized,
        })
    }

    /// The normalized text used for validation
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.normalized
    }

    /// The text exactly as submitted
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Length of the normalized text in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        letter_count(&self.normalized)
    }

    /// Always false: empty submissions never become candidates
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Length of the raw text in letters
    #[inline]
    #[must_use]
    pub fn raw_len(&self) -> usize {
        letter_count(&self.raw)
    }

    /// Consume the candidate, keeping the raw text
    #[must_use]
    pub fn into_raw(self) -> String {
        self.raw
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        let candidate = Candidate::normalize("\n  GoInG \t").unwrap();
        assert_eq!(candidate.text(), "going");
        assert_eq!(candidate.raw(), "\n  GoInG \t");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        let candidate = Candidate::normalize(" to go ").unwrap();
        assert_eq!(candidate.text(), "to go");
    }

    #[test]
    fn normalize_rejects_blank_input() {
        assert!(Candidate::normalize("").is_none());
        assert!(Candidate::normalize("   ").is_none());
        assert!(Candidate::normalize("\n\r\n\t").is_none());
    }

    #[test]
    fn lengths_count_characters() {
        let candidate = Candidate::normalize(" Café ").unwrap();
        assert_eq!(candidate.len(), 4);
        assert_eq!(candidate.raw_len(), 6);
        assert!(!candidate.is_empty());
    }

    #[test]
    fn lengths_count_combining_accent_once() {
        let candidate = Candidate::normalize("Cafe\u{301}").unwrap();
        assert_eq!(candidate.text(), "cafe\u{301}");
        assert_eq!(candidate.len(), 4);
        assert_eq!(candidate.raw_len(), 4);
    }

    #[test]
    fn into_raw_returns_submitted_text() {
        let candidate = Candidate::normalize("Tog ").unwrap();
        assert_eq!(candidate.into_raw(), "Tog ");
    }

    #[test]
    fn display_shows_normalized() {
        let candidate = Candidate::normalize("NOTE").unwrap();
        assert_eq!(format!("{candidate}"), "note");
    }
}
