//! Oklab perceptual color space
//!
//! Oklab is the Cartesian form behind the perceptual domain-coloring mode:
//! an OKLCH triple is turned into Oklab, then into linear RGB.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped. A domain-coloring chroma of 0.35 lies outside
/// the sRGB gamut for most hues; clipping happens in linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f32,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f32,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f32,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// ```
    /// use domain_color::Oklab;
    ///
    /// // Mid-gray: neutral, no chroma
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert_eq!(gray.a, 0.0);
    /// ```
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear RGB.
    ///
    /// The result is not clamped. Out-of-gamut Oklab colors will produce
    /// LinearRgb values outside 0.0..=1.0.
    ///
    /// ```
    /// use domain_color::{LinearRgb, Oklab};
    ///
    /// let linear = LinearRgb::from(Oklab::new(0.5, 0.0, 0.0));
    /// // Neutral gray has equal RGB components
    /// assert!((linear.r - linear.g).abs() < 0.001);
    /// assert!((linear.g - linear.b).abs() < 0.001);
    /// ```
    fn from(lab: Oklab) -> Self {
        // Step 1: Lab to LMS (inverse M2)
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        // Step 2: Cube (reverse nonlinearity)
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // Step 3: LMS to linear sRGB (inverse M1)
        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}
