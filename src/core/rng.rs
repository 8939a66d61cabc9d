//! Deterministic random number generation with forking per round.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each round draws from its own independent branch
//!
//! ## Session Usage
//!
//! ```
//! use star_match::core::GameRng;
//!
//! let mut session_rng = GameRng::new(42);
//!
//! // Every round gets a fresh fork
//! let mut first_round = session_rng.fork();
//! let mut second_round = session_rng.fork();
//! assert_ne!(first_round.seed(), second_round.seed());
//!
//! // Forks are deterministic - same session seed, same round seeds
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.fork().seed(), first_round.seed());
//! # let _ = (first_round.gen_range_inclusive(1, 9), second_round.gen_range_inclusive(1, 9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for rounds.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random integer in `[min, max]`, both ends included.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "empty range {min}..={max}");
        self.inner.gen_range(min..=max)
    }

    /// Generate a random index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_inclusive(0, 1000), rng2.gen_range_inclusive(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(7);
        let a = rng.fork();
        let b = rng.fork();

        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn test_inclusive_bounds_reached() {
        let mut rng = GameRng::new(42);
        let draws: Vec<_> = (0..500).map(|_| rng.gen_range_inclusive(1, 3)).collect();

        assert!(draws.contains(&1));
        assert!(draws.contains(&3));
        assert!(draws.iter().all(|d| (1..=3).contains(d)));
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.gen_range_inclusive(5, 5), 5);
        assert_eq!(rng.gen_index(1), 0);
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn test_inverted_range_panics() {
        GameRng::new(42).gen_range_inclusive(9, 1);
    }
}
