use crate::error::ConfigError;
use crate::random::RandomSource;

/// Interval bounds, in milliseconds, a trigger time is drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRange {
    pub min: f32,
    pub max: f32,
}

impl TriggerRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Range that always yields `period`
    pub const fn fixed(period: f32) -> Self {
        Self::new(period, period)
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        let valid = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.min <= self.max;
        if valid {
            Ok(self)
        } else {
            Err(ConfigError::InvalidTriggerRange)
        }
    }

    /// Draw a trigger time
    pub fn draw(self, rng: &mut impl RandomSource) -> f32 {
        rng.uniform_f32(self.min, self.max)
    }
}

/// Randomized countdown shared by the discrete modes
///
/// Accumulates elapsed time and fires once it reaches the trigger time.
/// A single `advance` fires at most once no matter how large the step is.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    range: TriggerRange,
    time_accumulator: f32,
    trigger_time: f32,
}

impl Trigger {
    /// Create a trigger armed with a freshly drawn trigger time
    pub fn armed(range: TriggerRange, rng: &mut impl RandomSource) -> Self {
        Self {
            range,
            time_accumulator: 0.0,
            trigger_time: range.draw(rng),
        }
    }

    pub const fn range(&self) -> TriggerRange {
        self.range
    }

    pub const fn time_accumulator(&self) -> f32 {
        self.time_accumulator
    }

    pub const fn trigger_time(&self) -> f32 {
        self.trigger_time
    }

    /// Accumulate `delta_ms`, returns `true` when the trigger fires
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        self.time_accumulator += delta_ms;
        self.time_accumulator >= self.trigger_time
    }

    /// Draw a new trigger time and restart accumulating
    pub fn rearm(&mut self, rng: &mut impl RandomSource) {
        self.rearm_divided(rng, 1.0);
    }

    /// Like [`rearm`](Self::rearm), with the drawn time divided by `divisor`
    pub fn rearm_divided(&mut self, rng: &mut impl RandomSource, divisor: f32) {
        self.trigger_time = self.range.draw(rng) / divisor;
        self.time_accumulator = 0.0;
    }

    /// Zero both accumulator and trigger time, the next advance fires
    pub fn reset(&mut self) {
        self.time_accumulator = 0.0;
        self.trigger_time = 0.0;
    }
}
