//! Segment toggle mode
//!
//! Every few seconds each segment is independently switched on or off and
//! recolored from the palette.

use super::{Mode, Trigger, TriggerRange};
use crate::color::Palette;
use crate::path::Path;
use crate::random::RandomSource;

const ACTIVE_PROBABILITY: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct SegmentToggleMode {
    trigger: Trigger,
    palette: Palette,
}

impl SegmentToggleMode {
    pub fn new(range: TriggerRange, palette: Palette, rng: &mut impl RandomSource) -> Self {
        Self {
            trigger: Trigger::armed(range, rng),
            palette,
        }
    }

    pub const fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}

impl Mode for SegmentToggleMode {
    fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        rng: &mut R,
    ) {
        if !self.trigger.advance(delta_ms) {
            return;
        }

        for segment in path.segments_mut() {
            segment.set_active(rng.chance(ACTIVE_PROBABILITY));
            segment.set_color(self.palette.pick(rng));
        }
        self.trigger.rearm(rng);
    }

    fn reset<const B: usize, const S: usize>(&mut self, path: &mut Path<B, S>) {
        self.trigger.reset();
        path.set_all_active(true);
    }
}
