//! Deterministic per-replicate and master RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each simulation replicate owns an independent `SmallRng` seeded by:
//!
//!   seed = master_seed XOR (replicate_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive replicate ids uniformly across the seed space.
//! This means:
//!
//! - Replicates never share RNG state, so a batch can run on any number of
//!   threads without contention.
//! - Replicate `i` draws the same stream no matter which thread runs it or in
//!   which order, so parallel and sequential batches agree.
//! - Growing `n_sims` leaves the streams of existing replicates untouched.
//!
//! Reproducibility is statistical: swapping the generator changes every draw.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Probability, ReplicateId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ReplicateRng ──────────────────────────────────────────────────────────────

/// RNG owned by exactly one simulation replicate.
///
/// Every stochastic step of a run (the daily exposure draws) takes
/// `&mut ReplicateRng`; nothing in the simulator reaches for a global
/// generator.
pub struct ReplicateRng(SmallRng);

impl ReplicateRng {
    /// Seed deterministically from the batch's master seed and a replicate id.
    pub fn new(master_seed: u64, replicate: ReplicateId) -> Self {
        let seed = master_seed ^ u64::from(replicate.0).wrapping_mul(MIXING_CONSTANT);
        ReplicateRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, for single runs and tests.
    pub fn from_seed(seed: u64) -> Self {
        ReplicateRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` / `rand_distr`
    /// distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// One Bernoulli trial with success probability `p`.
    #[inline]
    pub fn bernoulli(&mut self, p: Probability) -> bool {
        self.0.gen_bool(p.get())
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Batch-level RNG for operations outside any single replicate
/// (null-distribution permutations, bootstrap resampling, test thinning).
///
/// Used only in single-threaded contexts.  Derive per-thread or per-stage
/// generators with [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Draw a fresh master seed for a batch of replicates.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
