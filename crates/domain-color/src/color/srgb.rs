//! sRGB color type
//!
//! sRGB is the terminal color space of the pipeline: every pixel of an
//! [`RgbImage`](crate::RgbImage) is an `Srgb` with channels in 0.0..=1.0.

use std::fmt;

use super::linear_rgb::LinearRgb;
use super::lut::linear_to_srgb;
use super::sanitize_channel;

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    /// Pure black.
    pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
    /// Pure white, also the color of NaN samples.
    pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);

    /// Create a new Srgb color from float values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use domain_color::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use domain_color::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// let bytes = color.to_bytes();
    /// assert_eq!(bytes, [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Clamp every channel into 0.0..=1.0, mapping NaN to 1.0.
    ///
    /// NaN saturates bright rather than dark so that pathological samples
    /// (poles, 0/0) stand out in a rendered field.
    #[inline]
    pub fn sanitized(self) -> Self {
        Self {
            r: sanitize_channel(self.r),
            g: sanitize_channel(self.g),
            b: sanitize_channel(self.b),
        }
    }

    /// True when every channel is finite and inside 0.0..=1.0.
    #[inline]
    pub fn is_valid(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl fmt::Display for Srgb {
    /// Formats as a `#rrggbb` hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode through the lookup table.
    ///
    /// The input is sanitized first; the LUT is only defined on 0.0..=1.0.
    fn from(linear: LinearRgb) -> Self {
        let linear = linear.sanitized();
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}
