//! Individual validity rules
//!
//! Each rule is a plain predicate over already-normalized text.

use crate::core::RootWord;
use crate::dictionary::{Dictionary, Language};

/// True unless `word` exactly matches (case-sensitive) an entry of `used_words`
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// True if every letter of `word` can be taken from the root, each root letter
/// used at most once
///
/// # Examples
/// ```
/// use word_scramble::core::RootWord;
/// use word_scramble::validation::rules::is_derivable;
///
/// let root = RootWord::new("outgoing");
/// assert!(is_derivable("going", &root));
/// assert!(!is_derivable("ongoing", &root));
/// ```
#[must_use]
pub fn is_derivable(word: &str, root: &RootWord) -> bool {
    root.letters().consume_all(word)
}

/// True if the dictionary recognizes the whole of `word`
#[must_use]
pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D, language: &Language) -> bool {
    dictionary.is_recognized_word(word, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{EmptyDictionary, FakeDictionary};

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn original_when_history_empty() {
        assert!(is_original("going", &[]));
    }

    #[test]
    fn not_original_on_exact_match() {
        assert!(!is_original("going", &used(&["tog", "going"])));
    }

    #[test]
    fn originality_is_case_sensitive() {
        // History keeps raw text, so "Going" does not block "going"
        assert!(is_original("going", &used(&["Going"])));
        assert!(is_original("going", &used(&["going "])));
    }

    #[test]
    fn derivable_uses_each_letter_once() {
        let root = RootWord::new("potato");
        assert!(is_derivable("pot", &root));
        assert!(is_derivable("tot", &root));
        assert!(is_derivable("toot", &root));
        assert!(!is_derivable("tattoo", &root));
        assert!(!is_derivable("potatos", &root));
    }

    #[test]
    fn derivable_lowercases_root_only() {
        let root = RootWord::new("NOTEBOOK");
        assert!(is_derivable("note", &root));
        assert!(!is_derivable("NOTE", &root));
    }

    #[test]
    fn zzz_is_never_derivable_without_zs() {
        for root in ["outgoing", "potato", "silkworm"] {
            assert!(!is_derivable("zzz", &RootWord::new(root)));
        }
    }

    #[test]
    fn real_defers_to_dictionary() {
        let en = Language::english();
        assert!(is_real("going", &FakeDictionary::new(&["going"]), &en));
        assert!(!is_real("gogin", &FakeDictionary::new(&["going"]), &en));
        assert!(!is_real("going", &EmptyDictionary, &en));
    }
}
