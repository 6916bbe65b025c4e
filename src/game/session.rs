//! Session state for one play-through.
//!
//! The engine owns the live `Session` and hands out clones. A snapshot never
//! changes after it is returned, so a presentation layer can hold on to it
//! while the engine moves on.

use serde::{Deserialize, Serialize};

use super::status::Status;

/// Placeholder shown in place of the scramble when no round is running.
pub const PRESS_PLAY: &str = "Press Play";

/// Coarse lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Never started.
    #[default]
    Idle,
    /// Clock running.
    Playing,
    /// Clock hit zero.
    Ended,
}

/// State of one play-through.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) current_word: String,
    pub(crate) scrambled_word: String,
    pub(crate) score: u32,
    pub(crate) streak: u32,
    pub(crate) time_remaining: u32,
    pub(crate) phase: Phase,
    pub(crate) status: Status,
}

impl Session {
    /// The word to guess, or `""` before the first start.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// The shuffled letters shown to the player.
    #[must_use]
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled_word
    }

    /// Words solved this session.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Consecutive solves since the last wrong guess, skip or start.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while the clock is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Feedback line for the last action.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.status.message()
    }

    /// What the word panel should show: the scramble while playing, else a prompt.
    #[must_use]
    pub fn display_word(&self) -> &str {
        if self.is_active() {
            &self.scrambled_word
        } else {
            PRESS_PLAY
        }
    }

    /// Remove `penalty` seconds, ending the session if the clock hits zero.
    ///
    /// Returns true if the session ended.
    pub(crate) fn apply_penalty(&mut self, penalty: u32) -> bool {
        self.time_remaining = self.time_remaining.saturating_sub(penalty);
        self.end_if_expired()
    }

    pub(crate) fn end_if_expired(&mut self) -> bool {
        if self.time_remaining == 0 {
            self.phase = Phase::Ended;
            self.status = Status::TimeUp;
            true
        } else {
            false
        }
    }
}
