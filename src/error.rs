use core::fmt;

/// Configuration error detected while building the engine
///
/// All of these are startup problems. Nothing in the per-tick path returns
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Path has no LEDs or no segments
    EmptyPath,
    /// Segment lengths do not add up to the LED count of the path
    SegmentLengthMismatch { expected: usize, actual: usize },
    /// Pixel buffer capacity is too small for the LED count and channel order
    BufferTooSmall { required: usize, capacity: usize },
    /// More segments than the path can hold
    TooManySegments { count: usize, capacity: usize },
    /// Palette without colors
    EmptyPalette,
    /// Palette with more colors than it can hold
    TooManyColors,
    /// Fade function with more phase terms than supported
    TooManyFadeTerms,
    /// Fade floor outside of `0.0..=1.0` or non-positive period
    InvalidFade,
    /// Trigger range with `min > max`, negative or non-finite bounds
    InvalidTriggerRange,
    /// Flash growth range with `min > max` or negative bounds
    InvalidGrowthRange,
    /// Composite mode used as a child of another composite mode
    NestedComposite,
    /// Composite rotation slot is empty, out of range, or rotates to the same variant
    InvalidRotation,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => f.write_str("path has no leds or no segments"),
            Self::SegmentLengthMismatch { expected, actual } => write!(
                f,
                "segment lengths sum to {} but the path has {} leds",
                actual, expected
            ),
            Self::BufferTooSmall { required, capacity } => write!(
                f,
                "pixel buffer needs {} bytes but only {} are available",
                required, capacity
            ),
            Self::TooManySegments { count, capacity } => write!(
                f,
                "{} segments requested but only {} fit",
                count, capacity
            ),
            Self::EmptyPalette => f.write_str("palette is empty"),
            Self::TooManyColors => f.write_str("palette holds too many colors"),
            Self::TooManyFadeTerms => f.write_str("fade function has too many terms"),
            Self::InvalidFade => f.write_str("fade floor or period is out of range"),
            Self::InvalidTriggerRange => f.write_str("trigger range is invalid"),
            Self::InvalidGrowthRange => f.write_str("growth range is invalid"),
            Self::NestedComposite => f.write_str("composite modes cannot be nested"),
            Self::InvalidRotation => f.write_str("composite rotation is invalid"),
        }
    }
}
