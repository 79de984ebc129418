//! Linear RGB color type
//!
//! Linear RGB sits between OKLab and sRGB in the perceptual conversion
//! chain. Gamut clipping happens here, before gamma encoding.

use super::sanitize_channel;

/// A color in linear RGB color space.
///
/// Values produced by the OKLab conversion may fall outside 0.0..=1.0 (the
/// fixed domain-coloring chroma is far outside the sRGB gamut for most
/// hues); [`sanitized`](Self::sanitized) clips them back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel into 0.0..=1.0, mapping NaN to 1.0.
    #[inline]
    pub fn sanitized(self) -> Self {
        Self {
            r: sanitize_channel(self.r),
            g: sanitize_channel(self.g),
            b: sanitize_channel(self.b),
        }
    }
}
