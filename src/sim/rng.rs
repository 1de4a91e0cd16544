//! Injectable randomness
//!
//! The engine only ever asks for uniform floats in `[0, 1)`, so any source that
//! can produce those can drive it: a seeded PCG for reproducible runs, an
//! entropy-seeded PCG for normal play, or a scripted sequence for replays.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform floats in `[0, 1)`
pub trait RandomSource {
    /// Next value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `0..n` (`n` must be > 0)
    fn below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0);
        let v = (self.next_unit() * f64::from(n)).floor() as u32;
        // A misbehaving source returning 1.0 must not escape the range
        v.min(n.saturating_sub(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// PCG-backed random source
#[derive(Debug, Clone)]
pub struct SessionRng {
    inner: Pcg32,
    seed: u64,
}

impl SessionRng {
    /// Reproducible source for the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Fresh seed from the thread RNG
    pub fn from_entropy() -> Self {
        let seed = rand::rng().random::<u64>();
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always returns the same value
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        if v.is_nan() {
            0.0
        } else {
            v.clamp(0.0, 1.0 - f64::EPSILON)
        }
    }
}
