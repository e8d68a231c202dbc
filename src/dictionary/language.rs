//! Dictionary language codes

use std::fmt;

/// A language tag such as `en` or `en-US`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn english() -> Self {
        Self::new("en")
    }

    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }

    /// The primary subtag, lowercased (`en-US` -> `en`)
    #[must_use]
    pub fn primary(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    /// Whether two tags name the same language, ignoring region and case
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::Language;
    ///
    /// assert!(Language::english().matches(&Language::new("en_GB")));
    /// assert!(!Language::english().matches(&Language::new("fi")));
    /// ```
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.primary() == other.primary()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default().code(), "en");
    }

    #[test]
    fn primary_strips_region() {
        assert_eq!(Language::new("en-US").primary(), "en");
        assert_eq!(Language::new("EN_gb").primary(), "en");
        assert_eq!(Language::new("fi").primary(), "fi");
    }

    #[test]
    fn matches_ignores_region_and_case() {
        let english = Language::english();
        assert!(english.matches(&Language::new("EN")));
        assert!(english.matches(&Language::new("en-AU")));
        assert!(!english.matches(&Language::new("de")));
    }
}
