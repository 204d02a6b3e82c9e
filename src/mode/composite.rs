//! Composite mode
//!
//! Runs several child modes side by side and every now and then swaps the
//! child in the rotation slot for another variant. The result is a slowly
//! changing mix of effects instead of hard mode switches.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Mode, ModeConfig, ModeId, ModeSlot, Trigger, TriggerRange};
use crate::error::ConfigError;
use crate::path::Path;
use crate::random::RandomSource;

/// Number of child slots in a composite mode
pub const COMPOSITE_SLOTS: usize = 3;

/// Divisor applied to every other rotation interval
const SHORT_DURATION_DIVISOR: f32 = 2.0;

/// Composition of a composite mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeConfig {
    /// Child variants per slot, `None` leaves a slot empty
    pub children: [Option<ModeId>; COMPOSITE_SLOTS],
    /// Slot whose child gets swapped on rotation
    pub rotation_slot: usize,
    /// Variant parked outside the slots, swapped in on the first rotation
    pub alternate: ModeId,
    /// Interval between rotations
    pub rotation: TriggerRange,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            children: [Some(ModeId::Flash), Some(ModeId::OneColor), None],
            rotation_slot: 1,
            alternate: ModeId::SegmentToggle,
            rotation: TriggerRange::new(30_000.0, 120_000.0),
        }
    }
}

impl CompositeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rotation.validate()?;

        let rotating = self
            .children
            .get(self.rotation_slot)
            .copied()
            .flatten()
            .ok_or(ConfigError::InvalidRotation)?;
        if rotating == self.alternate {
            return Err(ConfigError::InvalidRotation);
        }

        let nested = self
            .children
            .iter()
            .flatten()
            .chain(core::iter::once(&self.alternate))
            .any(|id| *id == ModeId::Composite);
        if nested {
            return Err(ConfigError::NestedComposite);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CompositeMode {
    trigger: Trigger,
    children: [Option<ModeSlot>; COMPOSITE_SLOTS],
    /// Child waiting outside the slots for its next turn
    parked: ModeSlot,
    rotation_slot: usize,
    shorter_duration: bool,
}

impl CompositeMode {
    pub fn new(config: &ModeConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        let composite = &config.composite;
        composite.validate()?;

        let mut children: [Option<ModeSlot>; COMPOSITE_SLOTS] = [None, None, None];
        for (slot, id) in children.iter_mut().zip(composite.children) {
            if let Some(id) = id {
                *slot = Some(ModeSlot::from_id(id, config, rng)?);
            }
        }

        Ok(Self {
            trigger: Trigger::armed(composite.rotation, rng),
            children,
            parked: ModeSlot::from_id(composite.alternate, config, rng)?,
            rotation_slot: composite.rotation_slot,
            shorter_duration: false,
        })
    }

    /// Variant held by every slot
    pub fn child_ids(&self) -> [Option<ModeId>; COMPOSITE_SLOTS] {
        let mut ids = [None; COMPOSITE_SLOTS];
        for (id, child) in ids.iter_mut().zip(&self.children) {
            *id = child.as_ref().map(ModeSlot::id);
        }
        ids
    }

    pub fn children(&self) -> &[Option<ModeSlot>; COMPOSITE_SLOTS] {
        &self.children
    }

    pub fn parked_id(&self) -> ModeId {
        self.parked.id()
    }

    pub const fn shorter_duration(&self) -> bool {
        self.shorter_duration
    }

    pub const fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Swap the child in the rotation slot with the parked one
    fn rotate<const B: usize, const S: usize>(&mut self, path: &mut Path<B, S>) {
        let Some(Some(current)) = self.children.get_mut(self.rotation_slot) else {
            return;
        };

        current.reset(path);
        core::mem::swap(current, &mut self.parked);
        // Incoming child starts from scratch and fires on its next process
        current.reset(path);
        self.shorter_duration = !self.shorter_duration;

        #[cfg(feature = "esp32-log")]
        println!(
            "[CompositeMode.rotate] slot {} now runs {}, parked {}",
            self.rotation_slot,
            current.id().as_str(),
            self.parked.id().as_str()
        );
    }
}

impl Mode for CompositeMode {
    fn process<R: RandomSource, const B: usize, const S: usize>(
        &mut self,
        delta_ms: f32,
        path: &mut Path<B, S>,
        rng: &mut R,
    ) {
        let fire = self.trigger.advance(delta_ms);

        for child in self.children.iter_mut().flatten() {
            child.process(delta_ms, path, rng);
        }

        if !fire {
            return;
        }

        self.rotate(path);
        let divisor = if self.shorter_duration {
            SHORT_DURATION_DIVISOR
        } else {
            1.0
        };
        self.trigger.rearm_divided(rng, divisor);
    }

    fn reset<const B: usize, const S: usize>(&mut self, path: &mut Path<B, S>) {
        self.trigger.reset();
        self.shorter_duration = false;
        for child in self.children.iter_mut().flatten() {
            child.reset(path);
        }
        self.parked.reset(path);
    }
}
