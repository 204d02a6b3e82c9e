use heapless::Vec;

use super::{Color, DARK_ORANGE, GREEN, ORANGE, PURPLE_ISH, TOKYO_CHERRY, WHITE};
use crate::error::ConfigError;
use crate::random::RandomSource;

/// Maximum number of colors in a palette
pub const MAX_PALETTE_COLORS: usize = 8;

/// Colors used when no palette is configured
pub const DEFAULT_COLORS: [Color; 6] =
    [PURPLE_ISH, TOKYO_CHERRY, GREEN, DARK_ORANGE, ORANGE, WHITE];

/// Non-empty set of candidate colors the modes draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color, MAX_PALETTE_COLORS>,
}

impl Palette {
    /// Create a palette from a list of colors
    pub fn new(colors: &[Color]) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let colors = Vec::from_slice(colors).map_err(|()| ConfigError::TooManyColors)?;
        Ok(Self { colors })
    }

    /// Palette with a single color
    pub fn single(color: Color) -> Self {
        let mut colors = Vec::new();
        let _ = colors.push(color);
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false` for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Draw a color uniformly
    pub fn pick(&self, rng: &mut impl RandomSource) -> Color {
        let index = rng.index(self.colors.len());
        self.colors.get(index).copied().unwrap_or(Color::BLACK)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = Vec::new();
        for color in DEFAULT_COLORS {
            let _ = colors.push(color);
        }
        Self { colors }
    }
}
