//! Letter scrambling.
//!
//! A scramble is a Fisher-Yates shuffle of the word's characters, retried
//! until it differs from the word. Retries are capped; once the cap is hit the
//! characters are rotated left by one instead. Rotation differs from the
//! original for every word with at least two distinct characters, so the
//! result is only ever equal to the input for degenerate words ("aa", "b").

use smallvec::SmallVec;
use tracing::warn;

use crate::core::RandomSource;

/// Characters of a typical word fit inline without allocating.
type Letters = SmallVec<[char; 16]>;

/// True when no rearrangement of `word` can differ from it.
#[must_use]
pub fn is_degenerate(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}

/// Shuffle `letters` in place: for i from last down to 1, swap with j in [0, i].
fn fisher_yates<R: RandomSource + ?Sized>(letters: &mut [char], rng: &mut R) {
    for i in (1..letters.len()).rev() {
        let j = rng.gen_index(i + 1);
        letters.swap(i, j);
    }
}

/// Produce a permutation of `word` that differs from it whenever possible.
///
/// Degenerate words are returned unchanged without consuming any randomness.
pub fn scramble<R: RandomSource + ?Sized>(word: &str, rng: &mut R, max_attempts: u32) -> String {
    if is_degenerate(word) {
        return word.to_string();
    }

    let original: Letters = word.chars().collect();
    let mut letters = original.clone();

    for _ in 0..max_attempts {
        letters.copy_from_slice(&original);
        fisher_yates(&mut letters, rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }

    warn!(word = %word, attempts = max_attempts, "shuffle kept matching, rotating letters");
    letters.copy_from_slice(&original);
    letters.rotate_left(1);
    letters.into_iter().collect()
}
