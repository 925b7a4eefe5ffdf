//! Deterministic stochastic helpers, §10.6.
//!
//! The DP/DSSR core is itself fully deterministic (§ Non-goals: "no
//! stochastic programming"); this is for the host driver and any future
//! scenario generation that wants a reproducible random source instead of
//! reaching for `rand::thread_rng()` directly.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// A seeded RNG wrapper. Re-seeding discards all prior state, so a caller
/// that wants reproducible output across runs seeds once at startup.
pub struct EngineRng {
    rng: StdRng,
}

impl EngineRng {
    /// Seeds a fresh generator from `seed`. Same seed, same future draws.
    pub fn seed(seed: u64) -> Self {
        EngineRng { rng: StdRng::seed_from_u64(seed) }
    }

    /// Draws one value from `Normal(mean, std)`.
    ///
    /// # Arguments
    ///
    /// * `mean` - distribution mean
    /// * `std` - distribution standard deviation, must be non-negative
    pub fn normal(&mut self, mean: f64, std: f64) -> f64 {
        let dist = Normal::new(mean, std).expect("std must be non-negative and finite");
        dist.sample(&mut self.rng)
    }
}
