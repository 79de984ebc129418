//! The septaphase variant set.

use std::fmt;
use std::str::FromStr;

use crate::api::ColorError;

use super::rgb_image::RgbImage;

/// One of the seven renderings in a [`SeptaphaseVariants`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Continuous hue
    #[default]
    Continuous,
    /// Hue rounded to the nearest 60° band
    Rounded,
    /// Hue floored to its 60° band
    Thresholded,
    /// Lightness only (grayscale)
    Lightness,
    /// Phase only (grayscale)
    Phase,
    /// Real part, "u" (grayscale)
    Real,
    /// Imaginary part, "v" (grayscale)
    Imaginary,
}

impl Variant {
    /// All variants in storage order.
    pub const ALL: [Variant; 7] = [
        Variant::Continuous,
        Variant::Rounded,
        Variant::Thresholded,
        Variant::Lightness,
        Variant::Phase,
        Variant::Real,
        Variant::Imaginary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Continuous => "continuous",
            Variant::Rounded => "rounded",
            Variant::Thresholded => "thresholded",
            Variant::Lightness => "lightness",
            Variant::Phase => "phase",
            Variant::Real => "real",
            Variant::Imaginary => "imaginary",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ColorError;

    /// Parse a variant name; `u` and `v` are accepted for the real and
    /// imaginary grayscales.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(Variant::Continuous),
            "rounded" => Ok(Variant::Rounded),
            "thresholded" => Ok(Variant::Thresholded),
            "lightness" => Ok(Variant::Lightness),
            "phase" => Ok(Variant::Phase),
            "real" | "u" => Ok(Variant::Real),
            "imaginary" | "imag" | "v" => Ok(Variant::Imaginary),
            _ => Err(ColorError::UnknownVariant(s.to_string())),
        }
    }
}

/// Seven renderings of one field, so a viewer can switch between them
/// without recomputing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SeptaphaseVariants {
    images: [RgbImage; 7],
}

impl SeptaphaseVariants {
    /// Bundle images given in [`Variant::ALL`] order.
    pub fn new(images: [RgbImage; 7]) -> Self {
        Self { images }
    }

    /// The image for `variant`.
    #[inline]
    pub fn get(&self, variant: Variant) -> &RgbImage {
        &self.images[variant.index()]
    }

    /// Take ownership of the image for `variant`.
    pub fn into_variant(self, variant: Variant) -> RgbImage {
        let [continuous, rounded, thresholded, lightness, phase, real, imaginary] = self.images;
        match variant {
            Variant::Continuous => continuous,
            Variant::Rounded => rounded,
            Variant::Thresholded => thresholded,
            Variant::Lightness => lightness,
            Variant::Phase => phase,
            Variant::Real => real,
            Variant::Imaginary => imaginary,
        }
    }

    /// `(variant, image)` pairs in [`Variant::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, &RgbImage)> {
        Variant::ALL.into_iter().zip(self.images.iter())
    }

    /// Always 7.
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Srgb;

    #[test]
    fn test_variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
        assert_eq!("u".parse::<Variant>(), Ok(Variant::Real));
        assert_eq!("V".parse::<Variant>(), Ok(Variant::Imaginary));
    }

    #[test]
    fn test_unknown_variant() {
        assert_eq!(
            "sepia".parse::<Variant>(),
            Err(ColorError::UnknownVariant("sepia".to_string()))
        );
    }

    #[test]
    fn test_indexing_matches_all_order() {
        let images = std::array::from_fn(|i| RgbImage::new(vec![Srgb::new(i as f32 / 10.0, 0.0, 0.0)], 1, 1));
        let set = SeptaphaseVariants::new(images);

        assert_eq!(set.len(), 7);
        for (i, (variant, image)) in set.iter().enumerate() {
            assert_eq!(variant, Variant::ALL[i]);
            assert_eq!(image, set.get(variant));
            assert_eq!(image.pixel(0, 0).map(|p| p.r), Some(i as f32 / 10.0));
        }
        let phase = set.clone().into_variant(Variant::Phase);
        assert_eq!(&phase, set.get(Variant::Phase));
    }
}
