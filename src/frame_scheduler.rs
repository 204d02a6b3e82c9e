//! Frame scheduling and timing utilities.
//!
//! Turns wall-clock instants into the millisecond deltas the composer runs on.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::composer::Composer;
use crate::random::RandomSource;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u64 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Time step fed to the composer, in milliseconds.
    pub delta_ms: f32,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(composer, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    R: RandomSource,
    const MAX_BYTES: usize,
    const MAX_SEGMENTS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> {
    output: O,
    composer: Composer<'a, R, MAX_BYTES, MAX_SEGMENTS, INTENT_CHANNEL_SIZE>,
    last_frame: Option<Instant>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<
    'a,
    O: OutputDriver,
    R: RandomSource,
    const MAX_BYTES: usize,
    const MAX_SEGMENTS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> FrameScheduler<'a, O, R, MAX_BYTES, MAX_SEGMENTS, INTENT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler running at `DEFAULT_FPS`.
    pub fn new(
        composer: Composer<'a, R, MAX_BYTES, MAX_SEGMENTS, INTENT_CHANNEL_SIZE>,
        driver: O,
    ) -> Self {
        Self::with_frame_duration(composer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        composer: Composer<'a, R, MAX_BYTES, MAX_SEGMENTS, INTENT_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            composer,
            last_frame: None,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The first tick runs with a zero time step. The caller is responsible
    /// for waiting until `next_deadline` before calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls instead of catching up
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let delta_ms = self
            .last_frame
            .and_then(|last| now.checked_duration_since(last))
            .map_or(0.0, duration_ms);
        self.last_frame = Some(now);

        self.composer.tick(delta_ms, &mut self.output);

        self.next_frame += self.frame_duration;
        let sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_ticks(0));

        FrameResult {
            delta_ms,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn composer(&self) -> &Composer<'a, R, MAX_BYTES, MAX_SEGMENTS, INTENT_CHANNEL_SIZE> {
        &self.composer
    }

    pub fn composer_mut(
        &mut self,
    ) -> &mut Composer<'a, R, MAX_BYTES, MAX_SEGMENTS, INTENT_CHANNEL_SIZE> {
        &mut self.composer
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}

#[allow(clippy::cast_precision_loss)]
fn duration_ms(duration: Duration) -> f32 {
    duration.as_micros() as f32 / 1000.0
}
