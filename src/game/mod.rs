//! Game session engine: session state, status feedback and the engine itself.
//!
//! ## Lifecycle
//!
//! - **Idle**: before the first `start()`
//! - **Playing**: clock running; guesses, skips and ticks apply
//! - **Ended**: clock hit zero; everything but `start()` is a no-op
//!
//! `start()` from any phase begins a brand new session.

pub mod engine;
pub mod session;
pub mod status;

pub use engine::GameEngine;
pub use session::{Phase, Session, PRESS_PLAY};
pub use status::Status;
