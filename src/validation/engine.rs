//! Submission validator

use super::RejectionReason;
use super::rules::{is_derivable, is_original, is_real};
use crate::core::{Candidate, RootWord};
use crate::dictionary::{Dictionary, Language};

/// A submission that passed every rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceptance {
    /// Length of the validated (normalized) word in characters
    pub score_delta: usize,
}

/// Validity engine
///
/// Applies the rules in a fixed order against a dictionary and language.
pub struct Validator<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    language: Language,
}

impl<'a, D: Dictionary + ?Sized> Validator<'a, D> {
    /// Create a validator checking words in `language`
    pub const fn new(dictionary: &'a D, language: Language) -> Self {
        Self {
            dictionary,
            language,
        }
    }

    /// Create a validator for English
    pub fn english(dictionary: &'a D) -> Self {
        Self::new(dictionary, Language::english())
    }

    #[inline]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    #[inline]
    pub const fn dictionary(&self) -> &'a D {
        self.dictionary
    }

    /// Decide whether `candidate` may join a session
    ///
    /// Checks, first failure wins:
    /// 1. the exact word is not already in `used_words`
    /// 2. its letters can be taken from `root` without reuse
    /// 3. the dictionary recognizes it
    ///
    /// The dictionary is only consulted when the first two checks pass.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first failing check.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Candidate, RootWord};
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::validation::{RejectionReason, Validator};
    ///
    /// let dictionary = WordListDictionary::embedded();
    /// let validator = Validator::english(&dictionary);
    /// let root = RootWord::new("outgoing");
    ///
    /// let going = Candidate::normalize("going").unwrap();
    /// assert_eq!(validator.validate(&going, &root, &[]).unwrap().score_delta, 5);
    ///
    /// let zzz = Candidate::normalize("zzz").unwrap();
    /// assert_eq!(
    ///     validator.validate(&zzz, &root, &[]),
    ///     Err(RejectionReason::NotDerivable)
    /// );
    /// ```
    pub fn validate(
        &self,
        candidate: &Candidate,
        root: &RootWord,
        used_words: &[String],
    ) -> Result<Acceptance, RejectionReason> {
        let word = candidate.text();

        if !is_original(word, used_words) {
            return Err(RejectionReason::AlreadyUsed);
        }

        if !is_derivable(word, root) {
            return Err(RejectionReason::NotDerivable);
        }

        if !is_real(word, self.dictionary, &self.language) {
            return Err(RejectionReason::NotARealWord);
        }

        Ok(Acceptance {
            score_delta: candidate.len(),
        })
    }
}
