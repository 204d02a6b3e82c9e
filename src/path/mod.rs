//! LED path: the pixel buffer and the segments partitioning it
//!
//! The path is the only owner of the pixel bytes. Modes change segment
//! colors, segment activity and the reveal cursor. `update` turns that state
//! into bytes and hands them to the output driver.

mod segment;

use heapless::Vec;

pub use segment::{Segment, SegmentSpec};

use crate::OutputDriver;
use crate::color::{AQUA, ChannelOrder, Color};
use crate::error::ConfigError;
use crate::fade::{FadeConfig, FadeFunction, PhaseState};
use crate::math8::unit_to_scale;

/// Default reveal speed, LEDs per second
pub const DEFAULT_GROWTH_RATE: f32 = 800.0;

/// Default global brightness
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Path configuration
#[derive(Debug, Clone, Copy)]
pub struct PathConfig {
    /// Pixel byte layout of the strip
    pub channel_order: ChannelOrder,
    /// Global brightness, `0.0..=1.0`
    pub brightness: f32,
    /// Reveal cursor speed in LEDs per second
    pub growth_rate: f32,
    /// Initial color of every segment
    pub segment_color: Color,
    /// Fade applied while rendering
    pub fade: FadeConfig,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            channel_order: ChannelOrder::default(),
            brightness: DEFAULT_BRIGHTNESS,
            growth_rate: DEFAULT_GROWTH_RATE,
            segment_color: AQUA,
            fade: FadeConfig::default(),
        }
    }
}

/// Addressable LED path partitioned into segments
///
/// `MAX_BYTES` is the pixel buffer capacity (LEDs times channels),
/// `MAX_SEGMENTS` the segment capacity.
#[derive(Debug, Clone)]
pub struct Path<const MAX_BYTES: usize, const MAX_SEGMENTS: usize> {
    segments: Vec<Segment, MAX_SEGMENTS>,
    buffer: Vec<u8, MAX_BYTES>,
    num_leds: usize,
    channel_order: ChannelOrder,

    brightness: f32,
    reveal_cursor: f32,
    growth_rate: f32,

    fade: FadeFunction,
    phase: PhaseState,
    /// Fade used instead of the own one for the next rendered frame
    fade_override: Option<(FadeFunction, PhaseState)>,
}

impl<const MAX_BYTES: usize, const MAX_SEGMENTS: usize> Path<MAX_BYTES, MAX_SEGMENTS> {
    /// Create a path of `num_leds` LEDs split into the given segments
    ///
    /// Fails if the segment lengths do not add up to `num_leds` or if the
    /// buffers are too small. The render pass relies on this and never
    /// re-checks it.
    pub fn new(
        num_leds: usize,
        segments: &[SegmentSpec],
        config: &PathConfig,
    ) -> Result<Self, ConfigError> {
        if num_leds == 0 || segments.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        if segments.len() > MAX_SEGMENTS {
            return Err(ConfigError::TooManySegments {
                count: segments.len(),
                capacity: MAX_SEGMENTS,
            });
        }

        let total = segments
            .iter()
            .try_fold(0usize, |sum, spec| sum.checked_add(spec.length));
        if total != Some(num_leds) {
            return Err(ConfigError::SegmentLengthMismatch {
                expected: num_leds,
                actual: total.unwrap_or(usize::MAX),
            });
        }

        let channels = config.channel_order.channels();
        let required = num_leds
            .checked_mul(channels)
            .ok_or(ConfigError::BufferTooSmall {
                required: usize::MAX,
                capacity: MAX_BYTES,
            })?;
        let mut buffer = Vec::new();
        buffer
            .resize(required, 0)
            .map_err(|()| ConfigError::BufferTooSmall {
                required,
                capacity: MAX_BYTES,
            })?;

        let mut offset = 0;
        let mut built = Vec::new();
        for spec in segments {
            let _ = built.push(Segment::new(*spec, offset, config.segment_color));
            offset += spec.length;
        }

        #[allow(clippy::cast_precision_loss)]
        let reveal_cursor = num_leds as f32;

        Ok(Self {
            segments: built,
            buffer,
            num_leds,
            channel_order: config.channel_order,
            brightness: clamp_unit(config.brightness),
            reveal_cursor,
            growth_rate: config.growth_rate.max(0.0),
            fade: FadeFunction::new(&config.fade)?,
            phase: PhaseState::new(),
            fade_override: None,
        })
    }

    /// Create a path of `num_segments` equally long segments
    pub fn uniform(
        num_segments: usize,
        segment_length: usize,
        config: &PathConfig,
    ) -> Result<Self, ConfigError> {
        if num_segments > MAX_SEGMENTS {
            return Err(ConfigError::TooManySegments {
                count: num_segments,
                capacity: MAX_SEGMENTS,
            });
        }
        let mut specs: Vec<SegmentSpec, MAX_SEGMENTS> = Vec::new();
        for _ in 0..num_segments {
            let _ = specs.push(SegmentSpec::new("segment", segment_length));
        }
        let num_leds = num_segments.checked_mul(segment_length).ok_or(
            ConfigError::SegmentLengthMismatch {
                expected: usize::MAX,
                actual: usize::MAX,
            },
        )?;
        Self::new(num_leds, &specs, config)
    }

    pub const fn num_leds(&self) -> usize {
        self.num_leds
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub const fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// Set the color of every segment
    pub fn set_all_segments(&mut self, color: Color) {
        for segment in &mut self.segments {
            segment.set_color(color);
        }
    }

    /// Turn every segment on or off
    pub fn set_all_active(&mut self, active: bool) {
        for segment in &mut self.segments {
            segment.set_active(active);
        }
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Set global brightness, clamped to `0.0..=1.0`
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = clamp_unit(brightness);
    }

    /// Number of revealed LEDs; pixels at or past it stay dark
    pub const fn reveal_cursor(&self) -> f32 {
        self.reveal_cursor
    }

    /// Move the reveal cursor, clamped to `0..=num_leds`
    #[allow(clippy::cast_precision_loss)]
    pub fn set_reveal_cursor(&mut self, cursor: f32) {
        let max = self.num_leds as f32;
        self.reveal_cursor = if cursor.is_nan() { 0.0 } else { cursor.clamp(0.0, max) };
    }

    /// Reveal speed in LEDs per second
    pub const fn growth_rate(&self) -> f32 {
        self.growth_rate
    }

    pub fn set_growth_rate(&mut self, growth_rate: f32) {
        self.growth_rate = if growth_rate.is_nan() { 0.0 } else { growth_rate.max(0.0) };
    }

    pub const fn phase(&self) -> &PhaseState {
        &self.phase
    }

    pub const fn fade(&self) -> &FadeFunction {
        &self.fade
    }

    /// Current pixel bytes
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes of a single pixel
    pub fn pixel(&self, index: usize) -> Option<&[u8]> {
        let channels = self.channel_order.channels();
        let start = index.checked_mul(channels)?;
        self.buffer.get(start..start + channels)
    }

    /// Zero the pixel buffer
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Render the next frame with a foreign fade source
    ///
    /// Only the fade is swapped. The pixel pass still runs in
    /// [`update`](Self::update) from the segment state and reveal cursor at
    /// that moment. The override holds for one frame.
    pub fn override_fade(&mut self, fade: &FadeFunction, phase: &PhaseState) {
        match &mut self.fade_override {
            Some((current_fade, current_phase)) => {
                current_fade.clone_from(fade);
                *current_phase = *phase;
            }
            None => self.fade_override = Some((fade.clone(), *phase)),
        }
    }

    /// Render the current state, advance reveal cursor and phases, flush
    ///
    /// `delta_ms` is the elapsed time since the previous update.
    #[allow(clippy::cast_precision_loss)]
    pub fn update<O: OutputDriver>(&mut self, delta_ms: f32, output: &mut O) {
        let (fade, phase) = match &self.fade_override {
            Some((fade, phase)) => (fade, phase),
            None => (&self.fade, &self.phase),
        };
        render_frame(
            &mut self.buffer,
            &self.segments,
            self.channel_order,
            self.reveal_cursor,
            self.brightness,
            fade,
            phase,
        );
        self.fade_override = None;

        let max = self.num_leds as f32;
        self.reveal_cursor = (self.reveal_cursor + self.growth_rate * delta_ms / 1000.0).min(max);
        self.fade.advance(&mut self.phase, delta_ms);

        output.write(&self.buffer);
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clear `buffer` and draw every active, revealed pixel
#[allow(clippy::cast_precision_loss)]
fn render_frame(
    buffer: &mut [u8],
    segments: &[Segment],
    order: ChannelOrder,
    reveal_cursor: f32,
    brightness: f32,
    fade: &FadeFunction,
    phase: &PhaseState,
) {
    buffer.fill(0);
    let channels = order.channels();

    for segment in segments.iter().filter(|segment| segment.active()) {
        let color = segment.color();
        for index in segment.range() {
            if index as f32 >= reveal_cursor {
                break;
            }
            let scale = unit_to_scale(brightness * fade.intensity(index, phase));

            let start = index * channels;
            debug_assert!(start + channels <= buffer.len());
            if let Some(pixel) = buffer.get_mut(start..start + channels) {
                order.write(color, scale, pixel);
            }
        }
    }
}
