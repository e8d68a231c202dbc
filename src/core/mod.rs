//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O and no randomness.
//! All types here are pure, testable, and have clear set-theoretic properties.

mod candidate;
mod letters;
mod root;

pub use candidate::Candidate;
pub use letters::{LetterPool, letter_count};
pub use root::RootWord;
