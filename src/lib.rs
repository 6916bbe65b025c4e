//! # word-sprint
//!
//! A timed word-unscrambling game session engine.
//!
//! The player sees a scrambled word and types guesses against a countdown.
//! Correct answers score a point and extend the streak; wrong guesses and
//! skips break the streak and cost seconds. The session ends when the clock
//! hits zero.
//!
//! ## Design Principles
//!
//! 1. **Host-driven clock**: the engine never schedules anything. The host
//!    calls `tick()` once per second while the session is active.
//!
//! 2. **Injected randomness**: word picks and shuffles draw from a
//!    `RandomSource`. `GameRng` (ChaCha8) is seedable and checkpointable;
//!    tests can script exact draws.
//!
//! 3. **Snapshots out**: every operation returns an owned `Session` the
//!    presentation layer can keep while the engine moves on.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, setup errors
//! - `words`: vocabulary validation and scrambling
//! - `game`: session state, status messages, the engine

pub mod core;
pub mod game;
pub mod words;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameRng, GameRngState, RandomSource, SprintConfig};

pub use crate::game::{GameEngine, Phase, Session, Status};

pub use crate::words::{scramble, Vocabulary};
