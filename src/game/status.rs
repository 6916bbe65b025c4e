//! Player-facing feedback for the most recent action.

use serde::{Deserialize, Serialize};

/// Result of the last action, rendered by the host as a status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No session has been started yet.
    #[default]
    Idle,
    /// The host's play gate refused a start.
    NotAllowed,
    /// A session just started.
    Started,
    /// The guess was blank after trimming.
    EmptyGuess,
    /// The guess solved the word.
    Correct,
    /// The guess was wrong; the same scramble stays up.
    Wrong,
    /// The word was skipped.
    Skipped,
    /// The clock ran out.
    TimeUp,
}

impl Status {
    /// Text shown to the player. Empty for `Idle`.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Status::Idle => "",
            Status::NotAllowed => "Connect your account to play.",
            Status::Started => "Unscramble as many words as you can.",
            Status::EmptyGuess => "Type a word and press enter.",
            Status::Correct => "Perfect! Keep the streak.",
            Status::Wrong => "Close! Try again or skip.",
            Status::Skipped => "Skipped. New scramble incoming.",
            Status::TimeUp => "Time! Tap play again to beat your score.",
        }
    }

    /// Whether the action put a new word up, so the host should clear its input.
    #[must_use]
    pub const fn advanced_word(self) -> bool {
        matches!(self, Status::Started | Status::Correct | Status::Skipped)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
