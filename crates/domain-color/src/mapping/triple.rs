//! Mode-tagged color triples.
//!
//! HSL orders its parameters (H, S, L) while OKLCH orders them (L, C, H).
//! Rather than shuffle positional tuples across that boundary, a
//! [`ColorTriple`] names every component and only exposes positional order
//! through [`positional`](ColorTriple::positional) and
//! [`from_positional`](ColorTriple::from_positional).

use crate::color::{Hsl, LinearRgb, Oklab, Oklch, Srgb};
use crate::mode::ColorSpaceMode;

/// One color in either supported space, with named components.
///
/// Hue is always in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorTriple {
    /// Hue/Saturation/Lightness
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
    /// Lightness/Chroma/Hue
    Oklch {
        lightness: f64,
        chroma: f64,
        hue: f64,
    },
}

impl ColorTriple {
    /// Build a triple for `mode` from named parts.
    pub fn new(mode: ColorSpaceMode, hue: f64, chroma_or_saturation: f64, lightness: f64) -> Self {
        match mode {
            ColorSpaceMode::Hsl => ColorTriple::Hsl {
                hue,
                saturation: chroma_or_saturation,
                lightness,
            },
            ColorSpaceMode::Oklch => ColorTriple::Oklch {
                lightness,
                chroma: chroma_or_saturation,
                hue,
            },
        }
    }

    /// Interpret `values` in the positional order of `mode`.
    ///
    /// HSL reads `[hue, saturation, lightness]`; OKLCH reads
    /// `[lightness, chroma, hue]`.
    pub fn from_positional(mode: ColorSpaceMode, values: [f64; 3]) -> Self {
        let [a, b, c] = values;
        match mode {
            ColorSpaceMode::Hsl => Self::new(mode, a, b, c),
            ColorSpaceMode::Oklch => Self::new(mode, c, b, a),
        }
    }

    /// Components in the positional order of this triple's mode.
    pub fn positional(&self) -> [f64; 3] {
        match *self {
            ColorTriple::Hsl {
                hue,
                saturation,
                lightness,
            } => [hue, saturation, lightness],
            ColorTriple::Oklch {
                lightness,
                chroma,
                hue,
            } => [lightness, chroma, hue],
        }
    }

    pub fn mode(&self) -> ColorSpaceMode {
        match self {
            ColorTriple::Hsl { .. } => ColorSpaceMode::Hsl,
            ColorTriple::Oklch { .. } => ColorSpaceMode::Oklch,
        }
    }

    pub fn hue(&self) -> f64 {
        match *self {
            ColorTriple::Hsl { hue, .. } | ColorTriple::Oklch { hue, .. } => hue,
        }
    }

    pub fn lightness(&self) -> f64 {
        match *self {
            ColorTriple::Hsl { lightness, .. } | ColorTriple::Oklch { lightness, .. } => lightness,
        }
    }

    pub fn chroma_or_saturation(&self) -> f64 {
        match *self {
            ColorTriple::Hsl { saturation, .. } => saturation,
            ColorTriple::Oklch { chroma, .. } => chroma,
        }
    }

    /// Carry the named components over to `target`'s space.
    ///
    /// Between HSL and OKLCH this reverses the positional order while
    /// keeping hue, lightness and the middle channel where they belong.
    ///
    /// ```
    /// use domain_color::{ColorSpaceMode, mapping::ColorTriple};
    ///
    /// let hsl = ColorTriple::new(ColorSpaceMode::Hsl, 210.0, 1.0, 0.5);
    /// let lch = hsl.reinterpret(ColorSpaceMode::Oklch);
    /// assert_eq!(hsl.positional(), [210.0, 1.0, 0.5]);
    /// assert_eq!(lch.positional(), [0.5, 1.0, 210.0]);
    /// ```
    pub fn reinterpret(self, target: ColorSpaceMode) -> Self {
        Self::new(
            target,
            self.hue(),
            self.chroma_or_saturation(),
            self.lightness(),
        )
    }

    /// Convert to a sanitized sRGB color.
    ///
    /// Every output channel is in 0.0..=1.0; any channel that comes out NaN
    /// becomes 1.0.
    pub fn to_srgb(self) -> Srgb {
        match self {
            ColorTriple::Hsl {
                hue,
                saturation,
                lightness,
            } => Srgb::from(Hsl::new(hue as f32, saturation as f32, lightness as f32)).sanitized(),
            ColorTriple::Oklch {
                lightness,
                chroma,
                hue,
            } => {
                let lch = Oklch::from_degrees(lightness as f32, chroma as f32, hue as f32);
                let linear = LinearRgb::from(Oklab::from(lch)).sanitized();
                Srgb::from(linear).sanitized()
            }
        }
    }
}
