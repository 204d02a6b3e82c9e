//! Intents sent to the composer from outside the render loop
//!
//! A small bounded queue guarded by `critical-section`, so intents can be
//! posted from another task or from an interrupt handler while the render loop
//! drains them at the start of every tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Color;
use crate::mode::ModeId;

/// Request to change the running animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComposerIntent {
    /// Set the global brightness, `0.0..=1.0`
    SetBrightness(f32),
    /// Replace the running program
    SwitchMode(ModeId),
    /// Paint every segment in one color
    SetColor(Color),
    /// Set the reveal cursor speed in LEDs per second
    SetGrowthRate(f32),
    /// Reset the running program
    Reset,
}

/// Returned when the queue is full, carries the rejected intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrySendError<T>(pub T);

/// Returned when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded intent queue with room for `SIZE` pending intents
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ComposerIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for posting intents, any number may exist
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    /// Handle for draining intents, normally owned by the composer
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    pub fn try_send(&self, intent: ComposerIntent) -> Result<(), TrySendError<ComposerIntent>> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(intent)
                .map_err(TrySendError)
        })
    }

    pub fn try_receive(&self) -> Result<ComposerIntent, TryReceiveError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .pop_front()
                .ok_or(TryReceiveError)
        })
    }

    /// Number of pending intents
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    /// Post an intent, fails with the intent when the queue is full
    pub fn try_send(&self, intent: ComposerIntent) -> Result<(), TrySendError<ComposerIntent>> {
        self.channel.try_send(intent)
    }
}

#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ComposerIntent, TryReceiveError> {
        self.channel.try_receive()
    }
}
