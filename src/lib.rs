//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a random root
//! word. Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::session::{GameSession, Outcome};
//! use word_scramble::validation::Validator;
//!
//! let dictionary = WordListDictionary::embedded();
//! let validator = Validator::english(&dictionary);
//!
//! let mut session = GameSession::start(&["outgoing"], &mut StdRng::seed_from_u64(1));
//! let outcome = session.submit_word("going", &validator);
//!
//! assert!(matches!(outcome, Outcome::Accepted { points: 5, .. }));
//! assert_eq!(session.score(), 5);
//! ```

// Core domain types
pub mod core;

// Spelling oracle
pub mod dictionary;

// Word validity rules
pub mod validation;

// Game session state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

#[cfg(test)]
mod test_utils;
