mod order;
mod palette;

use smart_leds::RGB8;

pub use order::ChannelOrder;
pub use palette::{DEFAULT_COLORS, MAX_PALETTE_COLORS, Palette};

pub type Rgb = RGB8;

/// Packed pixel color with an optional white channel
///
/// Strips without a white LED simply ignore `white`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub rgb: Rgb,
    pub white: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgbw(0, 0, 0, 0);

    /// Create a color without white component
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgbw(r, g, b, 0)
    }

    /// Create a color with white component
    pub const fn rgbw(r: u8, g: u8, b: u8, white: u8) -> Self {
        Self {
            rgb: Rgb { r, g, b },
            white,
        }
    }

    /// Create a color from a packed `0xWWRRGGBB` value
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(packed: u32) -> Self {
        Self::rgbw(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
            ((packed >> 24) & 0xFF) as u8,
        )
    }

    /// Pack the color into `0xWWRRGGBB`
    pub const fn to_u32(self) -> u32 {
        ((self.white as u32) << 24)
            | ((self.rgb.r as u32) << 16)
            | ((self.rgb.g as u32) << 8)
            | self.rgb.b as u32
    }

    /// Value of the strongest component
    pub const fn brightest(self) -> u8 {
        let mut max = self.rgb.r;
        if self.rgb.g > max {
            max = self.rgb.g;
        }
        if self.rgb.b > max {
            max = self.rgb.b;
        }
        if self.white > max {
            max = self.white;
        }
        max
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self { rgb, white: 0 }
    }
}

// Tube installation colors, tuned by eye on GRBW strips.
pub const WHITE: Color = Color::rgbw(0, 0, 0, 255);
pub const ORANGE: Color = Color::rgbw(0, 255, 50, 40);
pub const GREEN: Color = Color::rgbw(60, 50, 255, 40);
pub const AQUA: Color = Color::rgbw(255, 80, 120, 40);
pub const PURPLE_ISH: Color = Color::rgbw(255, 140, 70, 40);
pub const DARK_ORANGE: Color = Color::rgbw(0, 200, 40, 40);
pub const TOKYO_CHERRY: Color = Color::rgbw(60, 225, 90, 40);
