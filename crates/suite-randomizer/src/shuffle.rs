//! Seeded test permutation.
//!
//! Draw one key per test from a freshly seeded generator, then stable-sort the
//! tests by key. The generator is ChaCha8 seeded through
//! `SeedableRng::seed_from_u64`, whose output is value-stable across platforms
//! and `rand_chacha` releases, so an order is a pure function of the seed and
//! the number of tests.

use crate::error::Result;
use crate::order::Seed;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Single-use permutation generator for one suite run.
///
/// Consumed by [`Shuffler::shuffle`] so that a run draws from exactly one
/// seeding of the generator.
#[derive(Debug, Clone)]
pub struct Shuffler {
    rng: ChaCha8Rng,
}

impl Shuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeds from a resolved [`Seed`]; fails if the seed is not numeric.
    pub fn from_seed(seed: &Seed) -> Result<Self> {
        Ok(Self::new(seed.value()?))
    }

    /// Draws `n` sort keys, one per element, in element order.
    fn keys(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.rng.next_u64()).collect()
    }

    /// Returns `items` permuted by this generator.
    pub fn shuffle<T>(mut self, items: Vec<T>) -> Vec<T> {
        let keys = self.keys(items.len());
        sort_by_keys(items, keys)
    }

    /// The permutation this generator would apply to `n` items, as source
    /// indices in run order.
    pub fn permutation(self, n: usize) -> Vec<usize> {
        self.shuffle((0..n).collect())
    }
}

/// Convenience wrapper: `Shuffler::new(seed).shuffle(items)`.
pub fn shuffle_tests<T>(items: Vec<T>, seed: u64) -> Vec<T> {
    Shuffler::new(seed).shuffle(items)
}

// Ascending by key; equal keys keep their input order (sort_by_key is stable).
fn sort_by_keys<T>(items: Vec<T>, keys: Vec<u64>) -> Vec<T> {
    debug_assert_eq!(items.len(), keys.len());
    let mut keyed: Vec<(u64, T)> = keys.into_iter().zip(items).collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, item)| item).collect()
}
