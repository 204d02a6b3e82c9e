//! Mode system with compile-time known mode variants
//!
//! Modes are stored by value in enums and dispatched with `match`.
//! Each mode implements the `Mode` trait.

mod composite;
mod flash;
mod one_color;
mod segment_toggle;
mod sinus_fill;
mod trigger;

pub use composite::{COMPOSITE_SLOTS, CompositeConfig, CompositeMode};
pub use flash::{FlashMode, GrowthRange};
pub use one_color::OneColorMode;
pub use segment_toggle::SegmentToggleMode;
pub use sinus_fill::SinusFillMode;
pub use trigger::{Trigger, TriggerRange};

use crate::color::Palette;
use crate::error::ConfigError;
use crate::fade::{FadeConfig, FadeFunction};
use crate::path::Path;
use crate::random::RandomSource;

const MODE_NAME_ONE_COLOR: &str = "one_color";
const MODE_NAME_FLASH: &str = "flash";
const MODE_NAME_SEGMENT_TOGGLE: &str = "segment_toggle";
const MODE_NAME_SINUS_FILL: &str = "sinus_fill";
const MODE_NAME_COMPOSITE: &str = "composite";

const MODE_ID_ONE_COLOR: u8 = 0;
const MODE_ID_FLASH: u8 = 1;
const MODE_ID_SEGMENT_TOGGLE: u8 = 2;
const MODE_ID_SINUS_FILL: u8 = 3;
const MODE_ID_COMPOSITE: u8 = 4;

pub trait Mode {
    /// Advance the mode by `delta_ms` milliseconds, mutating the path
    fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        rng: &mut R,
    );

    /// Reset mode state
    fn reset<const B: usize, const S: usize>(&mut self, path: &mut Path<B, S>);
}

/// Known mode ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    OneColor = MODE_ID_ONE_COLOR,
    Flash = MODE_ID_FLASH,
    SegmentToggle = MODE_ID_SEGMENT_TOGGLE,
    SinusFill = MODE_ID_SINUS_FILL,
    Composite = MODE_ID_COMPOSITE,
}

impl ModeId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_ONE_COLOR => Self::OneColor,
            MODE_ID_FLASH => Self::Flash,
            MODE_ID_SEGMENT_TOGGLE => Self::SegmentToggle,
            MODE_ID_SINUS_FILL => Self::SinusFill,
            MODE_ID_COMPOSITE => Self::Composite,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneColor => MODE_NAME_ONE_COLOR,
            Self::Flash => MODE_NAME_FLASH,
            Self::SegmentToggle => MODE_NAME_SEGMENT_TOGGLE,
            Self::SinusFill => MODE_NAME_SINUS_FILL,
            Self::Composite => MODE_NAME_COMPOSITE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_ONE_COLOR => Some(Self::OneColor),
            MODE_NAME_FLASH => Some(Self::Flash),
            MODE_NAME_SEGMENT_TOGGLE => Some(Self::SegmentToggle),
            MODE_NAME_SINUS_FILL => Some(Self::SinusFill),
            MODE_NAME_COMPOSITE => Some(Self::Composite),
            _ => None,
        }
    }
}

/// Trigger intervals per mode variant, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeTimings {
    pub one_color: TriggerRange,
    pub flash: TriggerRange,
    pub segment_toggle: TriggerRange,
}

impl Default for ModeTimings {
    fn default() -> Self {
        Self {
            one_color: TriggerRange::new(5_000.0, 25_000.0),
            flash: TriggerRange::new(8_000.0, 15_000.0),
            segment_toggle: TriggerRange::new(1_200.0, 6_000.0),
        }
    }
}

/// Everything needed to build any mode
#[derive(Debug, Clone)]
pub struct ModeConfig {
    pub palette: Palette,
    pub timings: ModeTimings,
    pub flash_growth: GrowthRange,
    pub sinus_fade: FadeConfig,
    pub composite: CompositeConfig,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            timings: ModeTimings::default(),
            flash_growth: GrowthRange::default(),
            sinus_fade: FadeConfig::SINUS_FILL,
            composite: CompositeConfig::default(),
        }
    }
}

impl ModeConfig {
    /// Mode config with the default timings and the given palette
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timings.one_color.validate()?;
        self.timings.flash.validate()?;
        self.timings.segment_toggle.validate()?;
        self.flash_growth.validate()?;
        FadeFunction::new(&self.sinus_fade)?;
        self.composite.validate()
    }
}

/// Mode slot - enum containing all single modes
#[derive(Debug, Clone)]
pub enum ModeSlot {
    OneColor(OneColorMode),
    Flash(FlashMode),
    SegmentToggle(SegmentToggleMode),
    SinusFill(SinusFillMode),
}

impl ModeSlot {
    /// Build a single mode; composite ids are rejected
    pub fn from_id(
        id: ModeId,
        config: &ModeConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ConfigError> {
        let timings = &config.timings;
        Ok(match id {
            ModeId::OneColor => Self::OneColor(OneColorMode::new(
                timings.one_color.validate()?,
                config.palette.clone(),
                rng,
            )),
            ModeId::Flash => Self::Flash(FlashMode::new(
                timings.flash.validate()?,
                config.flash_growth.validate()?,
                rng,
            )),
            ModeId::SegmentToggle => Self::SegmentToggle(SegmentToggleMode::new(
                timings.segment_toggle.validate()?,
                config.palette.clone(),
                rng,
            )),
            ModeId::SinusFill => {
                Self::SinusFill(SinusFillMode::new(FadeFunction::new(&config.sinus_fade)?))
            }
            ModeId::Composite => return Err(ConfigError::NestedComposite),
        })
    }

    /// Get the mode ID for external observation
    pub fn id(&self) -> ModeId {
        match self {
            Self::OneColor(_) => ModeId::OneColor,
            Self::Flash(_) => ModeId::Flash,
            Self::SegmentToggle(_) => ModeId::SegmentToggle,
            Self::SinusFill(_) => ModeId::SinusFill,
        }
    }

    pub fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        rng: &mut R,
    ) {
        match self {
            Self::OneColor(mode) => mode.process(delta_ms, path, rng),
            Self::Flash(mode) => mode.process(delta_ms, path, rng),
            Self::SegmentToggle(mode) => mode.process(delta_ms, path, rng),
            Self::SinusFill(mode) => mode.process(delta_ms, path, rng),
        }
    }

    pub fn reset<const B: usize, const S: usize>(&mut self, path: &mut Path<B, S>) {
        match self {
            Self::OneColor(mode) => Mode::reset(mode, path),
            Self::Flash(mode) => Mode::reset(mode, path),
            Self::SegmentToggle(mode) => Mode::reset(mode, path),
            Self::SinusFill(mode) => Mode::reset(mode, path),
        }
    }
}

/// Top level animation driven by the composer
#[derive(Debug, Clone)]
pub enum Program {
    Single(ModeSlot),
    Composite(CompositeMode),
}

impl Program {
    pub fn from_id(
        id: ModeId,
        config: &ModeConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ConfigError> {
        match id {
            ModeId::Composite => Ok(Self::Composite(CompositeMode::new(config, rng)?)),
            id => Ok(Self::Single(ModeSlot::from_id(id, config, rng)?)),
        }
    }

    pub fn id(&self) -> ModeId {
        match self {
            Self::Single(slot) => slot.id(),
            Self::Composite(_) => ModeId::Composite,
        }
    }

    pub fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        rng: &mut R,
    ) {
        match self {
            Self::Single(slot) => slot.process(delta_ms, path, rng),
            Self::Composite(mode) => mode.process(delta_ms, path, rng),
        }
    }

    pub fn reset<const B: usize, const S: usize>(&mut self, path: &mut Path<B, S>) {
        match self {
            Self::Single(slot) => slot.reset(path),
            Self::Composite(mode) => Mode::reset(mode, path),
        }
    }
}
