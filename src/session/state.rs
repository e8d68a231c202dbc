//! Session state and the submit-word workflow

use crate::core::{Candidate, RootWord};
use crate::dictionary::Dictionary;
use crate::validation::{RejectionReason, Validator};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument, warn};

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input: nothing happened and nothing should be shown
    Ignored,
    /// The word joined the history
    Accepted {
        /// Text as submitted and stored
        word: String,
        /// Points added to the score
        points: usize,
    },
    /// The word was turned down; the session is unchanged
    Rejected(RejectionReason),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// An active game
///
/// There is no "no session" value: a session only exists once [`GameSession::start`]
/// has picked a root word. Starting again replaces the root word, history and score
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    root_word: RootWord,
    used_words: Vec<String>,
    score: usize,
}

impl GameSession {
    /// Start a session with a root word picked uniformly from `word_list`
    ///
    /// Falls back to [`RootWord::FALLBACK`] when the list is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::session::GameSession;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = GameSession::start(&["outgoing", "notebook"], &mut rng);
    /// assert!(["outgoing", "notebook"].contains(&session.root_word().text()));
    /// assert_eq!(session.score(), 0);
    ///
    /// let empty: &[&str] = &[];
    /// assert_eq!(GameSession::start(empty, &mut rng).root_word().text(), "potato");
    /// ```
    pub fn start<S, R>(word_list: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let root_word = word_list
            .choose(rng)
            .map_or_else(RootWord::fallback, |word| RootWord::new(word.as_ref()));

        info!(root = %root_word, candidates = word_list.len(), "Starting session");
        Self::with_root(root_word)
    }

    /// Start a session with a fixed root word
    #[must_use]
    pub const fn with_root(root_word: RootWord) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Replace this session with a freshly started one
    pub fn restart<S, R>(&mut self, word_list: &[S], rng: &mut R)
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        *self = Self::start(word_list, rng);
    }

    #[inline]
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    /// Accepted words, most recent first, exactly as submitted
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Submit raw player input
    ///
    /// The input is lowercased and trimmed for validation. Blank input is
    /// [`Outcome::Ignored`]. On acceptance the *raw* text is prepended to the
    /// history and its character length added to the score.
    #[instrument(skip(self, validator), fields(root = %self.root_word))]
    pub fn submit_word<D: Dictionary + ?Sized>(
        &mut self,
        raw: &str,
        validator: &Validator<'_, D>,
    ) -> Outcome {
        let Some(candidate) = Candidate::normalize(raw) else {
            return Outcome::Ignored;
        };

        match validator.validate(&candidate, &self.root_word, &self.used_words) {
            Ok(acceptance) => {
                let points = candidate.raw_len();
                if points != acceptance.score_delta {
                    warn!(
                        validated = %candidate,
                        validated_len = acceptance.score_delta,
                        stored_len = points,
                        "Stored word differs from validated word"
                    );
                }

                let word = candidate.into_raw();
                self.used_words.insert(0, word.clone());
                self.score += points;
                debug!(%word, points, score = self.score, "Accepted word");

                Outcome::Accepted { word, points }
            }
            Err(reason) => {
                debug!(?reason, "Rejected word");
                Outcome::Rejected(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{EmptyDictionary, FakeDictionary};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn outgoing() -> GameSession {
        GameSession::with_root(RootWord::new("outgoing"))
    }

    #[test]
    fn start_picks_from_list() {
        let words = ["absolute", "blankets", "carefree"];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let session = GameSession::start(&words, &mut rng);
            assert!(words.contains(&session.root_word().text()));
            assert!(session.used_words().is_empty());
            assert_eq!(session.score(), 0);
        }
    }

    #[test]
    fn start_with_empty_list_uses_fallback() {
        let words: Vec<String> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        let session = GameSession::start(&words, &mut rng);
        assert_eq!(session.root_word().text(), "potato");
    }

    #[test]
    fn start_is_reproducible_with_same_seed() {
        let words = ["absolute", "blankets", "carefree", "daughter", "elephant"];

        let first = GameSession::start(&words, &mut StdRng::seed_from_u64(99));
        let second = GameSession::start(&words, &mut StdRng::seed_from_u64(99));
        assert_eq!(first.root_word(), second.root_word());
    }

    #[test]
    fn accepted_word_updates_history_and_score() {
        let dictionary = FakeDictionary::permissive();
        let validator = Validator::english(&dictionary);
        let mut session = outgoing();

        let outcome = session.submit_word("going", &validator);
        assert_eq!(
            outcome,
            Outcome::Accepted {
                word: "going".to_string(),
                points: 5
            }
        );
        assert_eq!(session.used_words(), ["going"]);
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn blank_input_is_ignored() {
        let dictionary = FakeDictionary::permissive();
        let validator = Validator::english(&dictionary);
        let mut session = outgoing();

        for raw in ["", "   ", "\n", "\t \r\n"] {
            assert_eq!(session.submit_word(raw, &validator), Outcome::Ignored);
        }
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(dictionary.lookups(), 0);
    }

    #[test]
    fn duplicate_submission_is_already_used() {
        let dictionary = FakeDictionary::permissive();
        let validator = Validator::english(&dictionary);
        let mut session = outgoing();

        assert!(session.submit_word("tog", &validator).is_accepted());
        assert_eq!(
            session.submit_word("tog", &validator),
            Outcome::Rejected(RejectionReason::AlreadyUsed)
        );
        assert_eq!(session.used_words(), ["tog"]);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let validator = Validator::english(&EmptyDictionary);
        let mut session = outgoing();
        let before = session.clone();

        assert_eq!(
            session.submit_word("tog", &validator),
            Outcome::Rejected(RejectionReason::NotARealWord)
        );
        assert_eq!(
            session.submit_word("zzz", &validator),
            Outcome::Rejected(RejectionReason::NotDerivable)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn raw_text_is_stored_and_scored() {
        let dictionary = FakeDictionary::permissive();
        let validator = Validator::english(&dictionary);
        let mut session = outgoing();

        let outcome = session.submit_word(" Going ", &validator);
        assert_eq!(
            outcome,
            Outcome::Accepted {
                word: " Going ".to_string(),
                points: 7
            }
        );
        assert_eq!(session.used_words(), [" Going "]);
        assert_eq!(session.score(), 7);
    }

    #[test]
    fn decomposed_accent_scores_by_letter() {
        let dictionary = FakeDictionary::permissive();
        let validator = Validator::english(&dictionary);
        let mut session = GameSession::with_root(RootWord::new("cafe\u{301}"));

        let outcome = session.submit_word("cafe\u{301}", &validator);
        assert_eq!(
            outcome,
            Outcome::Accepted {
                word: "cafe\u{301}".to_string(),
                points: 4
            }
        );
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn differently_cased_resubmission_is_not_a_duplicate() {
        let dictionary = FakeDictionary::permissive();
        let validator = Validator::english(&dictionary);
        let mut session = outgoing();

        assert!(session.submit_word("Going", &validator).is_accepted());
        // History holds "Going"; the normalized "going" does not equal it
        assert!(session.submit_word("going", &validator).is_accepted());
        assert_eq!(session.used_words(), ["going", "Going"]);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn restart_replaces_everything() {
        let dictionary = FakeDictionary::permissive();
        let validator = Validator::english(&dictionary);
        let mut session = outgoing();
        session.submit_word("out", &validator);

        session.restart(&["notebook"], &mut StdRng::seed_from_u64(3));
        assert_eq!(session.root_word().text(), "notebook");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    proptest! {
        #[test]
        fn history_and_score_track_accepted_words(
            words in proptest::collection::hash_set("[a-h]{1,6}", 0..12)
        ) {
            let dictionary = FakeDictionary::permissive();
            let validator = Validator::english(&dictionary);
            // Every letter six times, so any generated word is derivable
            let mut session = GameSession::with_root(RootWord::new("abcdefgh".repeat(6)));

            let words: Vec<String> = words.into_iter().collect();
            for word in &words {
                let accepted = session.submit_word(word, &validator).is_accepted();
                prop_assert!(accepted);
            }

            let expected_history: Vec<String> = words.iter().rev().cloned().collect();
            let expected_score: usize = words.iter().map(|w| crate::core::letter_count(w)).sum();
            prop_assert_eq!(session.used_words(), expected_history.as_slice());
            prop_assert_eq!(session.score(), expected_score);
        }

        #[test]
        fn blank_submissions_never_change_state(raw in "[ \t\r\n]{0,6}") {
            let dictionary = FakeDictionary::permissive();
            let validator = Validator::english(&dictionary);
            let mut session = outgoing();
            session.submit_word("out", &validator);
            let before = session.clone();

            prop_assert_eq!(session.submit_word(&raw, &validator), Outcome::Ignored);
            prop_assert_eq!(session, before);
        }

        #[test]
        fn root_is_member_of_nonempty_list(
            words in proptest::collection::vec("[a-z]{3,8}", 1..20),
            seed in any::<u64>()
        ) {
            let session = GameSession::start(&words, &mut StdRng::seed_from_u64(seed));
            prop_assert!(words.iter().any(|w| w == session.root_word().text()));
        }
    }
}
