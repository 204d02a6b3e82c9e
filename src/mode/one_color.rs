//! One color mode
//!
//! Paints the whole path in one color and switches to another palette color
//! every few seconds.

use super::{Mode, Trigger, TriggerRange};
use crate::color::{Color, Palette};
use crate::path::Path;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct OneColorMode {
    trigger: Trigger,
    palette: Palette,
    /// Color applied on the next fire
    next_color: Color,
}

impl OneColorMode {
    pub fn new(range: TriggerRange, palette: Palette, rng: &mut impl RandomSource) -> Self {
        let next_color = palette.pick(rng);
        Self {
            trigger: Trigger::armed(range, rng),
            palette,
            next_color,
        }
    }

    pub const fn next_color(&self) -> Color {
        self.next_color
    }

    pub const fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}

impl Mode for OneColorMode {
    fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        rng: &mut R,
    ) {
        if !self.trigger.advance(delta_ms) {
            return;
        }

        path.set_all_segments(self.next_color);
        self.next_color = self.palette.pick(rng);
        self.trigger.rearm(rng);
    }

    fn reset<const B: usize, const S: usize>(&mut self, path: &mut Path<B, S>) {
        self.trigger.reset();
        path.set_all_active(true);
    }
}
