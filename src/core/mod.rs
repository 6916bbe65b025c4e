//! Core engine plumbing: injected randomness, configuration, setup errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::SprintConfig;
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState, RandomSource};
