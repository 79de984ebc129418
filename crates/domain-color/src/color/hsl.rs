//! HSL color model.
//!
//! The classic domain-coloring encoding: phase drives hue, saturation is
//! pinned at 1.0 and the modulus drives lightness.

use super::srgb::Srgb;

/// A color in the HSL model over the sRGB primaries.
///
/// `h` is in degrees (any real, taken modulo 360), `s` and `l` in
/// 0.0..=1.0. The conversion is the standard hexcone formula and does not
/// clamp; NaN components propagate into the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f32,
    /// Saturation: 0.0 (gray) to 1.0 (full color)
    pub s: f32,
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color.
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

impl From<Hsl> for Srgb {
    /// ```
    /// use domain_color::{Hsl, Srgb};
    ///
    /// let azure = Srgb::from(Hsl::new(210.0, 1.0, 0.5));
    /// assert_eq!(azure, Srgb::new(0.0, 0.5, 1.0));
    /// ```
    fn from(hsl: Hsl) -> Self {
        let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
        let sector = hsl.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = hsl.l - c / 2.0;

        let (r, g, b) = if sector < 1.0 {
            (c, x, 0.0)
        } else if sector < 2.0 {
            (x, c, 0.0)
        } else if sector < 3.0 {
            (0.0, c, x)
        } else if sector < 4.0 {
            (0.0, x, c)
        } else if sector < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Srgb::new(r + m, g + m, b + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Srgb, expected: (f32, f32, f32)) {
        let ok = (actual.r - expected.0).abs() < 1e-5
            && (actual.g - expected.1).abs() < 1e-5
            && (actual.b - expected.2).abs() < 1e-5;
        assert!(ok, "expected {expected:?}, got {actual:?}");
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        assert_close(Srgb::from(Hsl::new(0.0, 1.0, 0.5)), (1.0, 0.0, 0.0));
        assert_close(Srgb::from(Hsl::new(60.0, 1.0, 0.5)), (1.0, 1.0, 0.0));
        assert_close(Srgb::from(Hsl::new(120.0, 1.0, 0.5)), (0.0, 1.0, 0.0));
        assert_close(Srgb::from(Hsl::new(180.0, 1.0, 0.5)), (0.0, 1.0, 1.0));
        assert_close(Srgb::from(Hsl::new(240.0, 1.0, 0.5)), (0.0, 0.0, 1.0));
        assert_close(Srgb::from(Hsl::new(300.0, 1.0, 0.5)), (1.0, 0.0, 1.0));
    }

    #[test]
    fn test_lightness_extremes() {
        assert_close(Srgb::from(Hsl::new(77.0, 1.0, 0.0)), (0.0, 0.0, 0.0));
        assert_close(Srgb::from(Hsl::new(77.0, 1.0, 1.0)), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(
            Srgb::from(Hsl::new(390.0, 1.0, 0.5)),
            Srgb::from(Hsl::new(30.0, 1.0, 0.5))
        );
        assert_eq!(
            Srgb::from(Hsl::new(-90.0, 1.0, 0.5)),
            Srgb::from(Hsl::new(270.0, 1.0, 0.5))
        );
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::{FromColor, Hsl as PaletteHsl, Srgb as PaletteSrgb};

        for hue in (0..360).step_by(15) {
            for lightness in [0.1_f32, 0.35, 0.5, 0.8] {
                let ours = Srgb::from(Hsl::new(hue as f32, 1.0, lightness));
                let reference_hsl: PaletteHsl = PaletteHsl::new(hue as f32, 1.0, lightness);
                let reference: PaletteSrgb = PaletteSrgb::from_color(reference_hsl);
                assert_close(ours, (reference.red, reference.green, reference.blue));
            }
        }
    }
}
