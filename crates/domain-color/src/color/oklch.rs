//! Oklch polar color space.
//!
//! Oklch is the polar form of Oklab, representing colors as:
//! - **L** (Lightness): Same as Oklab L
//! - **C** (Chroma): Colorfulness (distance from neutral axis)
//! - **h** (Hue): Hue angle in radians
//!
//! The perceptual domain-coloring mode writes phase into `h`, modulus into
//! `L` and holds `C` fixed.
//!
//! # References
//!
//! Bjorn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::oklab::Oklab;

/// Oklch: Polar form of Oklab (Lightness, Chroma, Hue).
///
/// # Components
///
/// - `l`: Lightness (same as Oklab L, 0.0 = black, 1.0 = white)
/// - `c`: Chroma (0.0 = achromatic)
/// - `h`: Hue angle in radians, measured from +a toward +b
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f32,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f32,
    /// Hue: angle in radians
    pub h: f32,
}

impl Oklch {
    /// Create an Oklch color with the hue given in radians.
    #[inline]
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create an Oklch color with the hue given in degrees.
    ///
    /// ```
    /// use domain_color::Oklch;
    ///
    /// let color = Oklch::from_degrees(0.7, 0.1, 180.0);
    /// assert!((color.h - std::f32::consts::PI).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn from_degrees(l: f32, c: f32, hue_deg: f32) -> Self {
        Self::new(l, c, hue_deg.to_radians())
    }
}

impl From<Oklch> for Oklab {
    /// Convert from Oklch to Oklab (polar to Cartesian).
    fn from(lch: Oklch) -> Self {
        Self::new(lch.l, lch.c * lch.h.cos(), lch.c * lch.h.sin())
    }
}
