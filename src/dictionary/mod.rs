//! Dictionary oracle
//!
//! Decides whether a string is a real word. The validation engine only ever sees
//! the [`Dictionary`] trait, so a spelling service, a word list or a test fake can
//! stand behind it.

mod language;
mod word_list;

pub use language::Language;
pub use word_list::WordListDictionary;

/// A source of truth for which strings are real words
pub trait Dictionary {
    /// Whether the whole of `text` is a correctly spelled word in `language`
    ///
    /// Implementations must match the entire string. A text that merely contains
    /// a word is not recognized.
    fn is_recognized_word(&self, text: &str, language: &Language) -> bool;
}
