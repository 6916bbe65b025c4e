//! The fixed word list a session draws from.

use tracing::{debug, warn};

use super::scramble::is_degenerate;
use crate::core::{ConfigError, RandomSource};

/// A validated, non-empty, lowercase word list.
///
/// Order is preserved. Duplicates are allowed; they simply weight the draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Normalize and validate a word list.
    ///
    /// Each entry is trimmed and lowercased. Blank entries and entries with
    /// inner whitespace are rejected, since no trimmed guess could match them.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for raw in words {
            let word = raw.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(ConfigError::InvalidWord {
                    word: raw.as_ref().to_string(),
                    reason: "word is blank",
                });
            }
            if word.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidWord {
                    word: raw.as_ref().to_string(),
                    reason: "word contains whitespace",
                });
            }
            if is_degenerate(&word) {
                warn!(word = %word, "vocabulary word cannot be scrambled into a different order");
            }
            normalized.push(word);
        }

        if normalized.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }

        Ok(Self { words: normalized })
    }

    /// Number of words (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in their configured order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Check whether a word is in the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draw a word uniformly, skipping `previous` when possible.
    ///
    /// Every entry equal to `previous` is excluded. If that leaves nothing
    /// (single-word list), the exclusion is dropped and the word repeats.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R, previous: Option<&str>) -> &str {
        let candidates: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|w| Some(*w) != previous)
            .collect();

        if candidates.is_empty() {
            debug!(previous = ?previous, "no alternative word, repeating");
            return &self.words[rng.gen_index(self.words.len())];
        }
        candidates[rng.gen_index(candidates.len())]
    }
}
