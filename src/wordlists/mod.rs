//! Word lists for the game
//!
//! Provides the embedded root-word and dictionary lists plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(!word.is_empty(), "Empty start word");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Start word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: rustc_hash::FxHashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Start word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn dictionary_knows_the_fallback_root() {
        assert!(DICTIONARY.contains(&crate::core::RootWord::FALLBACK));
    }
}
