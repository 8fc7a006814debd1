//! Randomness oracle for hit, crit, status and AI rolls.
//!
//! Every random decision in a battle draws from [`RngOracle::roll_percent`], a
//! uniform value in `[0, 100)`. Battles need no replay determinism, but keeping
//! all draws behind one trait lets tests script exact outcomes.

use std::collections::VecDeque;

/// Source of uniform percent rolls.
pub trait RngOracle {
    /// Draws a uniform value in `[0, 100)`.
    fn roll_percent(&mut self) -> f64;

    /// Returns true with the given percent chance (`roll < percent`).
    fn chance(&mut self, percent: f64) -> bool {
        self.roll_percent() < percent
    }

    /// Picks a uniform index in `0..len`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = (self.roll_percent() / 100.0 * len as f64) as usize;
        index.min(len - 1)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn roll_percent(&mut self) -> f64 {
        (**self).roll_percent()
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn roll_percent(&mut self) -> f64 {
        (**self).roll_percent()
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Used where a small self-contained generator is enough, e.g. simulations and
/// property tests. The runtime seeds its generator from OS entropy instead.
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// Advances the generator and returns the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn roll_percent(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0) * 100.0
    }
}

/// Replays a fixed queue of rolls, then repeats a fallback value.
///
/// The default fallback of 50 lands on the "ordinary" side of every stock
/// check: attacks hit, crits and 40% procs fail, multi-hit strikes connect.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    rolls: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRng {
    pub const DEFAULT_FALLBACK: f64 = 50.0;

    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback: Self::DEFAULT_FALLBACK,
        }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new([]).with_fallback(value)
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of scripted rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new([])
    }
}

impl RngOracle for ScriptedRng {
    fn roll_percent(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_rolls_stay_in_percent_range() {
        let mut rng = PcgRng::new(42);
        for _ in 0..10_000 {
            let roll = rng.roll_percent();
            assert!((0.0..100.0).contains(&roll), "roll {roll} out of range");
        }
    }

    #[test]
    fn pcg_is_repeatable_for_a_seed() {
        let mut a = PcgRng::new(7);
        let mut b = PcgRng::new(7);
        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn scripted_rolls_then_fallback() {
        let mut rng = ScriptedRng::new([1.0, 99.0]).with_fallback(10.0);
        assert_eq!(rng.roll_percent(), 1.0);
        assert_eq!(rng.roll_percent(), 99.0);
        assert_eq!(rng.roll_percent(), 10.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn chance_is_strictly_below() {
        let mut rng = ScriptedRng::new([39.9, 40.0]);
        assert!(rng.chance(40.0));
        assert!(!rng.chance(40.0));
    }

    #[test]
    fn pick_maps_roll_onto_index() {
        let mut rng = ScriptedRng::new([0.0, 49.9, 50.0, 99.99]);
        assert_eq!(rng.pick(2), 0);
        assert_eq!(rng.pick(2), 0);
        assert_eq!(rng.pick(2), 1);
        assert_eq!(rng.pick(2), 1);
        assert_eq!(rng.pick(0), 0);
    }

    #[test]
    fn works_through_mutable_reference_and_box() {
        fn first_roll<R: RngOracle>(mut rng: R) -> f64 {
            rng.roll_percent()
        }

        let mut inner = ScriptedRng::new([12.5, 80.0]);
        assert_eq!(first_roll(&mut inner), 12.5);
        assert_eq!(inner.remaining(), 1);

        let boxed: Box<dyn RngOracle> = Box::new(ScriptedRng::constant(3.0));
        assert_eq!(first_roll(boxed), 3.0);
    }
}
