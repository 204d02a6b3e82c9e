use core::ops::Range;

use crate::color::Color;

/// Static description of a segment: its name and length in LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSpec {
    pub name: &'static str,
    pub length: usize,
}

impl SegmentSpec {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }
}

/// Logical sub-range of the path with its own color and on/off state
///
/// A segment does not own pixel bytes. Its offset is the sum of the lengths
/// of the segments before it and never changes after the path is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: &'static str,
    offset: usize,
    length: usize,
    color: Color,
    active: bool,
}

impl Segment {
    pub(crate) const fn new(spec: SegmentSpec, offset: usize, color: Color) -> Self {
        Self {
            name: spec.name,
            offset,
            length: spec.length,
            color,
            active: true,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Index of the first LED of the segment
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    /// LED indices covered by the segment
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub const fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
