//! Spatial fade function
//!
//! Every lit pixel is multiplied by an intensity built from a few moving sine
//! waves. The waves are averaged, remapped from `-1..1` to `0..1` and clamped
//! to `floor..=1`. A lit pixel never goes fully dark.

use core::f32::consts::{PI, TAU};

use heapless::Vec;

use crate::error::ConfigError;

/// Maximum number of sine terms
pub const MAX_FADE_TERMS: usize = 3;

const SIN_B: f32 = 4.0 / PI;
const SIN_C: f32 = -4.0 / (PI * PI);
const SIN_P: f32 = 0.225;

/// Fast sine approximation
///
/// Parabolic fit with one refinement step, max error around 0.001.
/// Output is clamped to `-1.0..=1.0`.
#[inline]
pub fn fast_sin(x: f32) -> f32 {
    // Wrap into -PI..PI
    let x = x - TAU * libm::floorf((x + PI) / TAU);
    let y = SIN_B * x + SIN_C * x * libm::fabsf(x);
    let y = SIN_P * (y * libm::fabsf(y) - y) + y;
    y.clamp(-1.0, 1.0)
}

/// One moving sine wave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeTerm {
    /// Spatial frequency (radians per LED, before the period divisor)
    pub factor: f32,
    /// Phase offset speed in LEDs per millisecond
    pub speed: f32,
}

impl FadeTerm {
    pub const fn new(factor: f32, speed: f32) -> Self {
        Self { factor, speed }
    }
}

/// Static fade configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    pub terms: &'static [FadeTerm],
    /// Common divisor of all term arguments
    pub period: f32,
    /// Minimum visible intensity
    pub floor: f32,
}

const PATH_FADE_TERMS: [FadeTerm; 2] = [FadeTerm::new(0.1, 0.0012), FadeTerm::new(1.0, 0.017)];

const SINUS_FILL_TERMS: [FadeTerm; 3] = [
    FadeTerm::new(0.1, 0.0012),
    FadeTerm::new(1.0, 0.017),
    FadeTerm::new(30.0, 0.000_5),
];

impl FadeConfig {
    /// Slow shimmer used by the path itself
    pub const PATH: Self = Self {
        terms: &PATH_FADE_TERMS,
        period: 1.0,
        floor: 0.2,
    };

    /// Busier three-wave fill used by the sinus fill mode
    pub const SINUS_FILL: Self = Self {
        terms: &SINUS_FILL_TERMS,
        period: 1.0,
        floor: 0.05,
    };

    /// No modulation at all, every pixel at full intensity
    pub const FLAT: Self = Self {
        terms: &[],
        period: 1.0,
        floor: 1.0,
    };
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::PATH
    }
}

/// Moving phase offsets, one per term
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseState {
    offsets: [f32; MAX_FADE_TERMS],
}

impl PhaseState {
    pub const fn new() -> Self {
        Self {
            offsets: [0.0; MAX_FADE_TERMS],
        }
    }

    pub fn offsets(&self) -> &[f32; MAX_FADE_TERMS] {
        &self.offsets
    }
}

/// Validated fade function
#[derive(Debug, Clone, PartialEq)]
pub struct FadeFunction {
    terms: Vec<FadeTerm, MAX_FADE_TERMS>,
    period: f32,
    floor: f32,
}

impl FadeFunction {
    pub fn new(config: &FadeConfig) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&config.floor) {
            return Err(ConfigError::InvalidFade);
        }
        if !config.period.is_finite() || config.period <= 0.0 {
            return Err(ConfigError::InvalidFade);
        }
        let terms =
            Vec::from_slice(config.terms).map_err(|()| ConfigError::TooManyFadeTerms)?;

        Ok(Self {
            terms,
            period: config.period,
            floor: config.floor,
        })
    }

    /// Fade function without terms: constant intensity of 1.0
    pub fn flat() -> Self {
        Self {
            terms: Vec::new(),
            period: 1.0,
            floor: 1.0,
        }
    }

    pub fn floor(&self) -> f32 {
        self.floor
    }

    pub fn terms(&self) -> &[FadeTerm] {
        &self.terms
    }

    /// Intensity multiplier for a pixel, always within `floor..=1.0`
    #[allow(clippy::cast_precision_loss)]
    #[inline]
    pub fn intensity(&self, index: usize, phase: &PhaseState) -> f32 {
        if self.terms.is_empty() {
            return 1.0;
        }

        let position = index as f32;
        let sum: f32 = self
            .terms
            .iter()
            .zip(phase.offsets.iter())
            .map(|(term, offset)| fast_sin(term.factor * (position + offset) / self.period))
            .sum();
        let average = sum / self.terms.len() as f32;

        ((average + 1.0) * 0.5).clamp(self.floor, 1.0)
    }

    /// Advance the phase offsets by `delta_ms` milliseconds
    ///
    /// Offsets are wrapped to one spatial wavelength so long uptimes don't
    /// eat into float precision.
    pub fn advance(&self, phase: &mut PhaseState, delta_ms: f32) {
        if delta_ms <= 0.0 {
            return;
        }

        for (term, offset) in self.terms.iter().zip(phase.offsets.iter_mut()) {
            *offset += term.speed * delta_ms;

            let wavelength = TAU * self.period / libm::fabsf(term.factor);
            if wavelength.is_finite() && wavelength > 0.0 {
                *offset -= wavelength * libm::floorf(*offset / wavelength);
            }
        }
    }
}

impl Default for FadeFunction {
    fn default() -> Self {
        Self::flat()
    }
}
