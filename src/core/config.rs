//! Engine configuration.
//!
//! Hosts build a `SprintConfig` (or deserialize one) and hand it to
//! `GameEngine::new`. Missing fields fall back to the defaults below, which
//! are the classic Word Sprint rules: a one-minute round, 2s off for a wrong
//! guess, 3s off for a skip.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::words::Vocabulary;

/// Default session length in seconds.
pub const DEFAULT_SESSION_LENGTH_SECONDS: u32 = 60;

/// Default penalty for a wrong guess, in seconds.
pub const DEFAULT_WRONG_GUESS_PENALTY_SECONDS: u32 = 2;

/// Default penalty for skipping a word, in seconds.
pub const DEFAULT_SKIP_PENALTY_SECONDS: u32 = 3;

/// Default number of shuffles tried before falling back to rotation.
pub const DEFAULT_MAX_SCRAMBLE_ATTEMPTS: u32 = 10;

/// Built-in word list.
pub const DEFAULT_WORDS: &[&str] = &[
    "farcaster",
    "base",
    "wallet",
    "protocol",
    "smart",
    "contract",
    "onchain",
    "gasless",
    "miniapp",
    "builder",
    "token",
    "signal",
    "viral",
    "campaign",
    "community",
    "developer",
    "launch",
    "bridge",
    "staking",
    "quest",
    "mint",
    "badge",
    "score",
    "challenge",
    "arcade",
    "lighthouse",
];

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprintConfig {
    /// Words to draw from. Normalized to trimmed lowercase on validation.
    pub vocabulary: Vec<String>,

    /// Starting clock for each session (must be > 0).
    pub session_length_seconds: u32,

    /// Seconds removed for a wrong guess.
    pub wrong_guess_penalty_seconds: u32,

    /// Seconds removed for a skip.
    pub skip_penalty_seconds: u32,

    /// Shuffles tried before the rotation fallback kicks in.
    pub max_scramble_attempts: u32,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            session_length_seconds: DEFAULT_SESSION_LENGTH_SECONDS,
            wrong_guess_penalty_seconds: DEFAULT_WRONG_GUESS_PENALTY_SECONDS,
            skip_penalty_seconds: DEFAULT_SKIP_PENALTY_SECONDS,
            max_scramble_attempts: DEFAULT_MAX_SCRAMBLE_ATTEMPTS,
            seed: None,
        }
    }
}

impl SprintConfig {
    /// Create a config with the given words and default timings.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the session length.
    #[must_use]
    pub fn with_session_length(mut self, seconds: u32) -> Self {
        self.session_length_seconds = seconds;
        self
    }

    /// Set the wrong-guess penalty.
    #[must_use]
    pub fn with_wrong_guess_penalty(mut self, seconds: u32) -> Self {
        self.wrong_guess_penalty_seconds = seconds;
        self
    }

    /// Set the skip penalty.
    #[must_use]
    pub fn with_skip_penalty(mut self, seconds: u32) -> Self {
        self.skip_penalty_seconds = seconds;
        self
    }

    /// Set the shuffle retry cap.
    #[must_use]
    pub fn with_max_scramble_attempts(mut self, attempts: u32) -> Self {
        self.max_scramble_attempts = attempts;
        self
    }

    /// Pin the RNG seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the config without building an engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checked_vocabulary().map(|_| ())
    }

    pub(crate) fn checked_vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        if self.session_length_seconds == 0 {
            return Err(ConfigError::InvalidSessionLength {
                seconds: self.session_length_seconds,
            });
        }
        Vocabulary::new(&self.vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SprintConfig::default();
        assert_eq!(config.session_length_seconds, 60);
        assert_eq!(config.wrong_guess_penalty_seconds, 2);
        assert_eq!(config.skip_penalty_seconds, 3);
        assert_eq!(config.max_scramble_attempts, 10);
        assert_eq!(config.vocabulary.len(), 26);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SprintConfig::new(["base", "bridge"])
            .with_session_length(30)
            .with_wrong_guess_penalty(1)
            .with_skip_penalty(0)
            .with_max_scramble_attempts(4)
            .with_seed(9);

        assert_eq!(config.vocabulary, vec!["base".to_string(), "bridge".to_string()]);
        assert_eq!(config.session_length_seconds, 30);
        assert_eq!(config.wrong_guess_penalty_seconds, 1);
        assert_eq!(config.skip_penalty_seconds, 0);
        assert_eq!(config.max_scramble_attempts, 4);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_zero_session_length_rejected() {
        let config = SprintConfig::default().with_session_length(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSessionLength { seconds: 0 })
        );
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let config = SprintConfig::new(Vec::<String>::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyVocabulary));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SprintConfig =
            serde_json::from_str(r#"{"vocabulary": ["quest"], "skip_penalty_seconds": 5}"#).unwrap();

        assert_eq!(config.vocabulary, vec!["quest".to_string()]);
        assert_eq!(config.skip_penalty_seconds, 5);
        assert_eq!(config.session_length_seconds, DEFAULT_SESSION_LENGTH_SECONDS);
        assert_eq!(config.wrong_guess_penalty_seconds, DEFAULT_WRONG_GUESS_PENALTY_SECONDS);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SprintConfig::new(["mint", "badge"]).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: SprintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
