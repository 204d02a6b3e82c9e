//! Random number source used by the modes
//!
//! Modes never own a generator: one is injected into every `process` call.
//! Any `rand` generator works out of the box, tests can plug in a scripted one.

use rand::{Rng, RngCore};

/// Uniform random source
pub trait RandomSource {
    /// Uniform integer in `min..=max`
    ///
    /// Returns `min` when the range is empty.
    fn uniform_u32(&mut self, min: u32, max: u32) -> u32;

    /// Uniform float in `min..=max`
    ///
    /// Returns `min` when the range is empty.
    fn uniform_f32(&mut self, min: f32, max: f32) -> f32;

    /// Uniform index into a collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let max = u32::try_from(len - 1).unwrap_or(u32::MAX);
        (self.uniform_u32(0, max) as usize).min(len - 1)
    }

    /// Bernoulli draw, `true` with the given probability
    fn chance(&mut self, probability: f32) -> bool {
        self.uniform_f32(0.0, 1.0) < probability
    }
}

impl<R: RngCore> RandomSource for R {
    fn uniform_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn uniform_f32(&mut self, min: f32, max: f32) -> f32 {
        if min.is_nan() || max.is_nan() || max <= min {
            return min;
        }
        self.gen_range(min..=max)
    }
}
