use super::Color;
use crate::math8::scale8;

/// Byte layout of a single pixel in the output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Single channel, driven by the strongest color component
    Mono,
    Rgb,
    /// WS2812 style
    #[default]
    Grb,
    Rgbw,
    /// SK6812 RGBW style
    Grbw,
}

impl ChannelOrder {
    /// Number of bytes per pixel
    pub const fn channels(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Rgb | Self::Grb => 3,
            Self::Rgbw | Self::Grbw => 4,
        }
    }

    /// Write `color` scaled by `scale` into one pixel worth of bytes
    ///
    /// `pixel` must be exactly [`channels`](Self::channels) bytes long.
    pub fn write(self, color: Color, scale: u8, pixel: &mut [u8]) {
        debug_assert_eq!(pixel.len(), self.channels());

        let r = scale8(color.rgb.r, scale);
        let g = scale8(color.rgb.g, scale);
        let b = scale8(color.rgb.b, scale);
        let w = scale8(color.white, scale);

        match (self, pixel) {
            (Self::Mono, [v]) => *v = scale8(color.brightest(), scale),
            (Self::Rgb, [c0, c1, c2]) => (*c0, *c1, *c2) = (r, g, b),
            (Self::Grb, [c0, c1, c2]) => (*c0, *c1, *c2) = (g, r, b),
            (Self::Rgbw, [c0, c1, c2, c3]) => (*c0, *c1, *c2, *c3) = (r, g, b, w),
            (Self::Grbw, [c0, c1, c2, c3]) => (*c0, *c1, *c2, *c3) = (g, r, b, w),
            _ => {}
        }
    }
}
