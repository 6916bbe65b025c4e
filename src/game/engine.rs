//! The game session engine.
//!
//! `GameEngine` owns the vocabulary, the timing rules, the random source and
//! the live `Session`. Every operation runs to completion synchronously and
//! returns a snapshot of the resulting session.
//!
//! The engine has no clock. The host calls [`GameEngine::tick`] once per
//! elapsed second while the session is active and stops when it is not.
//!
//! ```
//! use word_sprint::{GameEngine, SprintConfig};
//!
//! let config = SprintConfig::new(["base", "bridge"]).with_seed(7);
//! let mut engine = GameEngine::new(config).unwrap();
//!
//! let session = engine.start();
//! assert!(session.is_active());
//!
//! let answer = session.current_word().to_uppercase();
//! let session = engine.submit_guess(&answer);
//! assert_eq!(session.score(), 1);
//! ```

use tracing::{debug, info};

use super::session::{Phase, Session};
use super::status::Status;
use crate::core::{ConfigError, GameRng, GameRngState, RandomSource, SprintConfig};
use crate::words::{scramble, Vocabulary};

/// Timed word-unscrambling state machine.
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    vocabulary: Vocabulary,
    session_length_seconds: u32,
    wrong_guess_penalty_seconds: u32,
    skip_penalty_seconds: u32,
    max_scramble_attempts: u32,
    rng: R,
    session: Session,
}

impl GameEngine<GameRng> {
    /// Build an engine seeded from `config.seed`, or from OS entropy if unset.
    pub fn new(config: SprintConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "seeded game rng");
        Self::with_rng(config, rng)
    }

    /// Capture the RNG position, e.g. to replay a session from this point.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Build an engine around a caller-supplied random source.
    ///
    /// `config.seed` is ignored here; the source is used as-is.
    pub fn with_rng(config: SprintConfig, rng: R) -> Result<Self, ConfigError> {
        let vocabulary = config.checked_vocabulary()?;
        Ok(Self {
            vocabulary,
            session_length_seconds: config.session_length_seconds,
            wrong_guess_penalty_seconds: config.wrong_guess_penalty_seconds,
            skip_penalty_seconds: config.skip_penalty_seconds,
            max_scramble_attempts: config.max_scramble_attempts,
            rng,
            session: Session::default(),
        })
    }

    /// The validated word list.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Current session without changing anything.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Start a fresh session, discarding any previous one.
    ///
    /// Also serves as restart while a session is running.
    pub fn start(&mut self) -> Session {
        self.session = Session {
            time_remaining: self.session_length_seconds,
            phase: Phase::Playing,
            status: Status::Started,
            ..Session::default()
        };
        self.next_word(None);
        debug!(
            word = %self.session.current_word,
            seconds = self.session_length_seconds,
            "session started"
        );
        self.session.clone()
    }

    /// Start only if the host says the player may play.
    ///
    /// A refused start leaves the session untouched apart from its status.
    pub fn start_gated(&mut self, allowed: bool) -> Session {
        if !allowed {
            debug!("start refused by play gate");
            self.session.status = Status::NotAllowed;
            return self.session.clone();
        }
        self.start()
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> Session {
        if self.session.is_active() {
            self.session.time_remaining = self.session.time_remaining.saturating_sub(1);
            if self.session.end_if_expired() {
                self.log_ended();
            }
        }
        self.session.clone()
    }

    /// Check a guess against the current word.
    ///
    /// The guess is trimmed and lowercased before comparison.
    pub fn submit_guess(&mut self, text: &str) -> Session {
        if !self.session.is_active() {
            return self.session.clone();
        }

        let guess = text.trim().to_lowercase();
        if guess.is_empty() {
            self.session.status = Status::EmptyGuess;
            return self.session.clone();
        }

        if guess == self.session.current_word {
            self.session.score += 1;
            self.session.streak += 1;
            self.session.status = Status::Correct;
            debug!(
                word = %self.session.current_word,
                score = self.session.score,
                streak = self.session.streak,
                "word solved"
            );
            let solved = std::mem::take(&mut self.session.current_word);
            self.next_word(Some(solved.as_str()));
        } else {
            self.session.streak = 0;
            self.session.status = Status::Wrong;
            debug!(penalty = self.wrong_guess_penalty_seconds, "wrong guess");
            if self.session.apply_penalty(self.wrong_guess_penalty_seconds) {
                self.log_ended();
            }
        }
        self.session.clone()
    }

    /// Give up on the current word for a time penalty.
    pub fn skip(&mut self) -> Session {
        if !self.session.is_active() {
            return self.session.clone();
        }

        self.session.streak = 0;
        debug!(
            word = %self.session.current_word,
            penalty = self.skip_penalty_seconds,
            "word skipped"
        );
        if self.session.apply_penalty(self.skip_penalty_seconds) {
            self.log_ended();
        } else {
            self.session.status = Status::Skipped;
            let skipped = std::mem::take(&mut self.session.current_word);
            self.next_word(Some(skipped.as_str()));
        }
        self.session.clone()
    }

    /// Pick and scramble the next word, avoiding `previous`.
    fn next_word(&mut self, previous: Option<&str>) {
        let word = self.vocabulary.pick(&mut self.rng, previous).to_string();
        self.session.scrambled_word = scramble(&word, &mut self.rng, self.max_scramble_attempts);
        self.session.current_word = word;
    }

    fn log_ended(&self) {
        info!(
            score = self.session.score,
            streak = self.session.streak,
            "session ended"
        );
    }
}
