//! The injected random source and its default `SmallRng` implementation.
//!
//! # Determinism strategy
//!
//! A run draws every random number from one [`RandomSource`] owned by the
//! engine, on the engine thread, in a fixed order:
//!
//! 1. construction: `x`, `y` for each agent in index order, then the
//!    distancing-eligible sample;
//! 2. each step, movement: `dx`, `dy` for each agent in index order;
//! 3. each step, transmission: one draw per in-range (Infectious,
//!    Susceptible) pair, sources in index order, targets in index order;
//! 4. each step, transition: one draw per Infectious agent in index order.
//!
//! Two runs with the same seed and configuration therefore produce identical
//! histories, regardless of the contact search or the `parallel` feature.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform sampling used by every stochastic decision in the engine.
///
/// Only [`unit`](Self::unit) is required; the remaining methods derive from
/// it.  [`SimRng`] overrides them with `rand`'s native samplers.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform draw in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.unit()
    }

    /// `true` when a fresh [`unit`](Self::unit) draw is below `p`.
    ///
    /// `p <= 0` never succeeds; `p >= 1` always does.
    fn bernoulli(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// `amount` distinct indices drawn uniformly from `0..len`.
    ///
    /// # Panics
    /// Panics if `amount > len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        assert!(amount <= len, "cannot sample {amount} of {len} without replacement");
        // Partial Fisher-Yates over an index table.
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..amount {
            let span = len - i;
            let offset = ((self.unit() * span as f64) as usize).min(span - 1);
            pool.swap(i, i + offset);
        }
        pool.truncate(amount);
        pool
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG backed by `SmallRng`.
///
/// Used only on the engine thread.  Seed it for reproducible runs; use
/// [`SimRng::from_entropy`] when reproducibility is not needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Runs are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.0.gen_range(low..=high)
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount).into_vec()
    }
}
