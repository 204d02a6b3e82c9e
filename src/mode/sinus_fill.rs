//! Sinus fill mode
//!
//! Continuous mode: every tick the path is rendered with this mode's own
//! moving sine waves instead of the path's fade.

use super::Mode;
use crate::fade::{FadeFunction, PhaseState};
use crate::path::Path;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct SinusFillMode {
    fade: FadeFunction,
    phase: PhaseState,
}

impl SinusFillMode {
    pub const fn new(fade: FadeFunction) -> Self {
        Self {
            fade,
            phase: PhaseState::new(),
        }
    }

    pub const fn phase(&self) -> &PhaseState {
        &self.phase
    }
}

impl Mode for SinusFillMode {
    fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        _rng: &mut R,
    ) {
        self.fade.advance(&mut self.phase, delta_ms);
        path.override_fade(&self.fade, &self.phase);
    }

    fn reset<const B: usize, const S: usize>(&mut self, _path: &mut Path<B, S>) {
        self.phase = PhaseState::new();
    }
}
