//! Game session state
//!
//! A session owns the root word, the history of accepted words and the score,
//! and applies validator verdicts to them.

mod state;

pub use state::{GameSession, Outcome};
