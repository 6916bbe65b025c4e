//! Word handling: the validated vocabulary and the scrambler.

pub mod scramble;
pub mod vocabulary;

pub use scramble::{is_degenerate, scramble};
pub use vocabulary::Vocabulary;
