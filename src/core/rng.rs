//! Deterministic random number generation for match setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same grid and deal
//! - **Uniform shuffles**: Fisher–Yates over ChaCha8, never a random-comparator sort
//! - **Context streams**: Independent sequences for each shuffle (concept
//!   axis, context axis, deck) so one never perturbs another
//!
//! ```
//! use linhas::core::MatchRng;
//!
//! let rng = MatchRng::new(42);
//! let mut deck_rng = rng.for_context("deck");
//!
//! let mut cells = vec![1, 2, 3, 4];
//! deck_rng.shuffle(&mut cells);
//!
//! // Same seed and context, same order.
//! let mut again = vec![1, 2, 3, 4];
//! MatchRng::new(42).for_context("deck").shuffle(&mut again);
//! assert_eq!(cells, again);
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Seeded RNG with per-purpose streams.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same seed and context always produce the same stream, on every
    /// run, so seeded matches replay exactly.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        // Unkeyed hash; std's DefaultHasher makes no stability promise.
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place (uniform over permutations).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut MatchRng) -> Vec<u32> {
        let mut items: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut items);
        items
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = MatchRng::new(42);
        let mut rng2 = MatchRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(shuffled(&mut MatchRng::new(1)), shuffled(&mut MatchRng::new(2)));
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = MatchRng::new(42);
        let mut ctx1 = rng.for_context("concepts");
        let mut ctx2 = rng.for_context("contexts");

        assert_ne!(shuffled(&mut ctx1), shuffled(&mut ctx2));
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = MatchRng::new(42).for_context("deck");
        let mut ctx2 = MatchRng::new(42).for_context("deck");

        assert_eq!(ctx1.seed(), ctx2.seed());
        assert_eq!(shuffled(&mut ctx1), shuffled(&mut ctx2));
    }

    #[test]
    fn test_context_depends_on_seed() {
        assert_ne!(MatchRng::new(1).for_context("deck").seed(), MatchRng::new(2).for_context("deck").seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = MatchRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // All 24 permutations of 4 items should come up about equally often.
        // A comparator-sort shuffle fails this badly.
        const TRIALS: usize = 48_000;
        let mut rng = MatchRng::new(7);
        let mut counts = std::collections::HashMap::new();

        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2, 3];
            rng.shuffle(&mut items);
            *counts.entry(items).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), 24);
        let expected = TRIALS / 24;
        for (perm, count) in counts {
            let deviation = count.abs_diff(expected);
            assert!(deviation < expected / 10, "{perm:?} seen {count} times, expected ~{expected}");
        }
    }
}
