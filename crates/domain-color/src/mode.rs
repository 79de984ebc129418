//! Color space selection.

use std::fmt;
use std::str::FromStr;

use crate::api::ColorError;
use crate::mapping::lightness::{HSL_SATURATION, OKLCH_CHROMA};

/// The closed set of color encodings a field can be rendered in.
///
/// Every mode-specific constant (hue offset, septaphase alignment, fixed
/// chroma/saturation) and every conversion formula is resolved by an
/// exhaustive `match` on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpaceMode {
    /// Hue/Saturation/Lightness over the sRGB primaries.
    #[default]
    Hsl,
    /// Lightness/Chroma/Hue in the perceptually uniform OKLab space.
    Oklch,
}

impl ColorSpaceMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [ColorSpaceMode; 2] = [ColorSpaceMode::Hsl, ColorSpaceMode::Oklch];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ColorSpaceMode::Hsl => "hsl",
            ColorSpaceMode::Oklch => "oklch",
        }
    }

    /// Rotation (degrees) added to the phase before it becomes a hue.
    ///
    /// Chosen so that the positive real axis lands on an intuitive hue in
    /// each space. Changing it only rotates the color wheel.
    pub fn hue_offset(self) -> f64 {
        match self {
            ColorSpaceMode::Hsl => 120.0,
            ColorSpaceMode::Oklch => 150.0,
        }
    }

    /// Extra rotation (degrees) applied before septaphase discretization so
    /// that the 60° bands line up with named hues.
    pub fn septaphase_rotation(self) -> f64 {
        match self {
            ColorSpaceMode::Hsl => 0.0,
            ColorSpaceMode::Oklch => -30.0,
        }
    }

    /// The fixed middle channel: HSL saturation or OKLCH chroma.
    pub fn chroma_or_saturation(self) -> f64 {
        match self {
            ColorSpaceMode::Hsl => HSL_SATURATION,
            ColorSpaceMode::Oklch => OKLCH_CHROMA,
        }
    }
}

impl fmt::Display for ColorSpaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceMode {
    type Err = ColorError;

    /// Parse a mode name (case-insensitive, surrounding whitespace ignored).
    ///
    /// `"perceptual"` is accepted as an alias for OKLCH.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsl" => Ok(ColorSpaceMode::Hsl),
            "oklch" | "perceptual" => Ok(ColorSpaceMode::Oklch),
            _ => Err(ColorError::UnsupportedColorSpace(s.to_string())),
        }
    }
}
