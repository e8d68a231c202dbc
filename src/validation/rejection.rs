//! Rejection reasons shown to the player

use thiserror::Error;

/// Why a submission was turned down
///
/// Each reason carries a short title and a longer message for the notice shown
/// to the player. Rejections are returned as data and leave the session as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectionReason {
    /// The exact word is already in the session history
    #[error("Word used already")]
    AlreadyUsed,
    /// The word needs letters the root word does not have
    #[error("Word not recognized")]
    NotDerivable,
    /// The dictionary does not know the word
    #[error("Not even a word")]
    NotARealWord,
}

impl RejectionReason {
    /// Notice title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotDerivable => "Word not recognized",
            Self::NotARealWord => "Not even a word",
        }
    }

    /// Notice body
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Be more original",
            Self::NotDerivable => "That didn't even come from the word given",
            Self::NotARealWord => "Okay that's too original",
        }
    }
}
