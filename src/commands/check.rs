//! Word checking command
//!
//! Plays a fixed list of submissions against a given root word.

use crate::core::RootWord;
use crate::dictionary::Dictionary;
use crate::session::{GameSession, Outcome};
use crate::validation::Validator;

/// Configuration for checking words
pub struct CheckConfig {
    pub root: String,
    pub words: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root: String, words: Vec<String>) -> Self {
        Self { root, words }
    }
}

/// Result of checking a list of words
pub struct CheckResult {
    pub root: String,
    pub steps: Vec<CheckStep>,
    pub score: usize,
    pub used_words: Vec<String>,
}

impl CheckResult {
    /// Number of submissions that were accepted
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_accepted()).count()
    }
}

/// A single submission and what happened to it
pub struct CheckStep {
    pub input: String,
    pub outcome: Outcome,
}

/// Submit each word, in order, to a session rooted at `config.root`
pub fn check_words<D: Dictionary + ?Sized>(
    config: CheckConfig,
    validator: &Validator<'_, D>,
) -> CheckResult {
    let mut session = GameSession::with_root(RootWord::new(config.root.clone()));

    let steps = config
        .words
        .into_iter()
        .map(|input| {
            let outcome = session.submit_word(&input, validator);
            CheckStep { input, outcome }
        })
        .collect();

    CheckResult {
        root: config.root,
        steps,
        score: session.score(),
        used_words: session.used_words().to_vec(),
    }
}
