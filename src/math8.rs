/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Convert a unit factor (0.0-1.0) into a [`scale8`] factor
///
/// Values outside the unit range (and NaN) are clamped, so the result is
/// always a valid byte scale.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_scale(factor: f32) -> u8 {
    if factor.is_nan() || factor <= 0.0 {
        return 0;
    }
    if factor >= 1.0 {
        return 255;
    }
    (factor * 255.0 + 0.5) as u8
}

/// Scale a channel byte by a unit factor
#[inline]
pub fn scale_unit(value: u8, factor: f32) -> u8 {
    scale8(value, unit_to_scale(factor))
}
