//! Word validity engine
//!
//! Decides whether a submitted word may join a session: originality first,
//! then derivability from the root word, then dictionary recognition.

mod engine;
mod rejection;
pub mod rules;

pub use engine::{Acceptance, Validator};
pub use rejection::RejectionReason;
