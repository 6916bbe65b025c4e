//! Setup-time errors.
//!
//! Only engine construction can fail. Once an engine exists, every operation
//! is total.

use thiserror::Error;

/// Invalid engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("vocabulary must contain at least one word")]
    EmptyVocabulary,

    #[error("session length must be positive, got {seconds}s")]
    InvalidSessionLength { seconds: u32 },

    #[error("invalid vocabulary word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },
}
