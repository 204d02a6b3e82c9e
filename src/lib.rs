#![no_std]

pub mod color;
pub mod composer;
pub mod error;
pub mod fade;
pub mod frame_scheduler;
pub mod intent;
pub mod math8;
pub mod mode;
pub mod path;
pub mod random;

pub use composer::{Composer, ComposerConfig};
pub use error::ConfigError;
pub use fade::{FadeConfig, FadeFunction, FadeTerm, PhaseState};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent::{ComposerIntent, IntentChannel, IntentReceiver, IntentSender};
pub use mode::{
    CompositeConfig, CompositeMode, Mode, ModeConfig, ModeId, ModeSlot, ModeTimings, Program,
    TriggerRange,
};
pub use path::{Path, PathConfig, Segment, SegmentSpec};
pub use random::RandomSource;

pub use color::{ChannelOrder, Color, Palette, Rgb};
pub use embassy_time::{Duration, Instant};
pub use rand::rngs::SmallRng;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Receives the raw pixel bytes laid out in the path's channel order.
pub trait OutputDriver {
    /// Write one frame to the LED strip
    fn write(&mut self, data: &[u8]);
}
