//! Flash mode
//!
//! Periodically blanks the path and lets it grow back from the first LED,
//! producing a chase with a randomized speed.

use super::{Mode, Trigger, TriggerRange};
use crate::error::ConfigError;
use crate::path::Path;
use crate::random::RandomSource;

/// Reveal speed bounds, as multiples of the path length per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRange {
    pub min_factor: f32,
    pub max_factor: f32,
}

impl GrowthRange {
    pub const fn new(min_factor: f32, max_factor: f32) -> Self {
        Self {
            min_factor,
            max_factor,
        }
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        let valid = self.min_factor.is_finite()
            && self.max_factor.is_finite()
            && self.min_factor >= 0.0
            && self.min_factor <= self.max_factor;
        if valid {
            Ok(self)
        } else {
            Err(ConfigError::InvalidGrowthRange)
        }
    }
}

impl Default for GrowthRange {
    fn default() -> Self {
        Self::new(1.0, 4.0)
    }
}

#[derive(Debug, Clone)]
pub struct FlashMode {
    trigger: Trigger,
    growth: GrowthRange,
}

impl FlashMode {
    pub fn new(range: TriggerRange, growth: GrowthRange, rng: &mut impl RandomSource) -> Self {
        Self {
            trigger: Trigger::armed(range, rng),
            growth,
        }
    }

    pub const fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}

impl Mode for FlashMode {
    #[allow(clippy::cast_precision_loss)]
    fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        rng: &mut R,
    ) {
        if !self.trigger.advance(delta_ms) {
            return;
        }

        let num_leds = path.num_leds() as f32;
        path.set_reveal_cursor(0.0);
        path.set_growth_rate(rng.uniform_f32(
            num_leds * self.growth.min_factor,
            num_leds * self.growth.max_factor,
        ));
        self.trigger.rearm(rng);
    }

    fn reset<const B: usize, const S: usize>(&mut self, _path: &mut Path<B, S>) {
        // The cursor grows back on its own
        self.trigger.reset();
    }
}
