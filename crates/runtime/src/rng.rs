//! Entropy-backed [`RngOracle`] for live battles.

use battle_core::RngOracle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform percent rolls drawn from `rand`'s standard generator.
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngOracle for EntropyRng {
    fn roll_percent(&mut self) -> f64 {
        self.inner.gen_range(0.0..100.0)
    }
}
