//! Deterministic random number generation.
//!
//! All randomness in the engine comes from a seeded ChaCha8 stream:
//!
//! - **Setup**: each catalog gets its own context stream derived from the
//!   game seed, so adding a card to one deck does not reshuffle the others.
//! - **Gameplay**: the only random event during play is reshuffling the
//!   production discard pile. Its stream position lives inside `GameState`
//!   as a `GameRngState`, which keeps every transition a pure function of
//!   `(state, action)`.
//!
//! ```
//! use tycoon_engine::core::GameRng;
//!
//! let deck: im::Vector<u32> = (0..10).collect();
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::from_state(&a.state());
//! assert_eq!(a.shuffled(&deck), b.shuffled(&deck));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG with serializable position.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// `FxHasher` has a fixed algorithm, so a seed replays the same game on
    /// any toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Shuffle a persistent vector, returning the shuffled copy.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &im::Vector<T>) -> im::Vector<T> {
        let mut buffer: Vec<T> = items.iter().cloned().collect();
        self.shuffle(&mut buffer);
        buffer.into_iter().collect()
    }

    /// Get the current position for storing in game state.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a stored position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position so the size is constant regardless of
/// how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameRngState {
    /// Stream seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::Vector;

    fn deck() -> Vector<u32> {
        (0..30).collect()
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let a = GameRng::new(42).shuffled(&deck());
        let b = GameRng::new(42).shuffled(&deck());
        let c = GameRng::new(43).shuffled(&deck());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_catalog_contexts_are_independent() {
        let root = GameRng::new(42);
        let towns = root.for_context("towns").shuffled(&deck());
        let railroads = root.for_context("railroads").shuffled(&deck());
        let towns_again = GameRng::new(42).for_context("towns").shuffled(&deck());

        assert_ne!(towns, railroads);
        assert_eq!(towns, towns_again);
    }

    #[test]
    fn test_context_seed_uses_fx_hash() {
        let mut hasher = FxHasher::default();
        42u64.hash(&mut hasher);
        "towns".hash(&mut hasher);
        assert_eq!(GameRng::new(42).for_context("towns").state().seed, hasher.finish());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = GameRng::new(9);
        let mut cards: Vec<u32> = (1..=12).collect();
        rng.shuffle(&mut cards);

        let mut sorted = cards.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_stored_position_resumes_stream() {
        let mut rng = GameRng::new(5).for_context("gameplay");
        let _ = rng.shuffled(&deck());
        let stored = rng.state();
        assert_ne!(stored.word_pos, 0);

        let next = rng.shuffled(&deck());
        let resumed = GameRng::from_state(&stored).shuffled(&deck());
        assert_eq!(next, resumed);
    }

    #[test]
    fn test_position_survives_json() {
        let stored = GameRng::new(3).state();
        let json = serde_json::to_string(&stored).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stored);
    }
}
