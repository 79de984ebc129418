//! DomainColoring builder: the primary entry point for the crate.
//!
//! [`DomainColoring`] wraps the mapping pipeline (polar extraction, hue and
//! lightness mapping, assembly) behind a small fluent builder. The free
//! functions at the bottom of this module are one-line shortcuts for the
//! default configuration of each mode.

use crate::api::ColorError;
use crate::field::{CartesianParts, ComplexField, PolarField};
use crate::grid::Grid;
use crate::mapping::hue::hue_grid;
use crate::mapping::lightness::lightness_grid;
use crate::mapping::septaphase::{phase_gray, signed_gray};
use crate::mapping::{assemble, discretize, round_hues, threshold_hues, ChannelSet};
use crate::mode::ColorSpaceMode;
use crate::output::{RgbImage, SeptaphaseVariants, Variant};

/// Domain-coloring builder.
///
/// # Design
///
/// - Constructor requires a [`ColorSpaceMode`]; offset and chroma take the
///   mode's defaults
/// - Configuration methods consume and return `self`
/// - Rendering methods take `&self`, so one builder colors any number of
///   fields
///
/// # Example
///
/// ```
/// use domain_color::{ColorSpaceMode, ComplexField, DomainColoring, Srgb};
/// use num_complex::Complex64;
///
/// let i = Complex64::new(0.0, 1.0);
/// let field = ComplexField::from_rows(vec![
///     vec![Complex64::new(0.0, 0.0), i],
///     vec![Complex64::new(-1.0, 0.0), -i],
/// ])
/// .unwrap();
///
/// let image = DomainColoring::new(ColorSpaceMode::Hsl).color(&field).unwrap();
/// assert_eq!(image.pixel(0, 0), Some(Srgb::BLACK));
/// assert_eq!(image.pixel(1, 0), Some(Srgb::new(1.0, 0.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainColoring {
    mode: ColorSpaceMode,
    hue_offset: f64,
    chroma_or_saturation: f64,
}

impl DomainColoring {
    /// Create a builder with the mode's default hue offset (HSL 120°,
    /// OKLCH 150°) and middle channel (saturation 1.0 / chroma 0.35).
    pub fn new(mode: ColorSpaceMode) -> Self {
        Self {
            mode,
            hue_offset: mode.hue_offset(),
            chroma_or_saturation: mode.chroma_or_saturation(),
        }
    }

    /// Override the rotation applied to phase before it becomes hue.
    #[inline]
    pub fn hue_offset(mut self, degrees: f64) -> Self {
        self.hue_offset = degrees;
        self
    }

    /// Override the constant saturation (HSL) or chroma (OKLCH).
    #[inline]
    pub fn chroma_or_saturation(mut self, value: f64) -> Self {
        self.chroma_or_saturation = value;
        self
    }

    #[inline]
    pub fn mode(&self) -> ColorSpaceMode {
        self.mode
    }

    /// Map a polar field to its channel set without assembling it.
    pub fn channels(&self, polar: &PolarField) -> Result<ChannelSet, ColorError> {
        self.channels_from(polar.modulus(), &polar.phase_degrees())
    }

    /// Color a complex field.
    pub fn color(&self, field: &ComplexField) -> Result<RgbImage, ColorError> {
        let polar = PolarField::from_field(field);
        Ok(assemble(&self.channels(&polar)?))
    }

    /// Color precomputed modulus and phase (radians) grids.
    ///
    /// The grids must share one shape; otherwise this fails with
    /// [`ColorError::ShapeMismatch`] before any numeric work.
    pub fn color_polar(&self, modulus: &Grid<f64>, phase: &Grid<f64>) -> Result<RgbImage, ColorError> {
        modulus.ensure_same_shape(phase, "phase grid")?;
        let phase_deg = phase.map(|p| p.to_degrees());
        Ok(assemble(&self.channels_from(modulus, &phase_deg)?))
    }

    /// Render all seven [`Variant`](crate::Variant)s of a complex field.
    ///
    /// The rounded and thresholded images reuse the continuous lightness
    /// and middle channel; only the hue is discretized. The four gray
    /// images are assembled with zero saturation/chroma so they share the
    /// mode's lightness scale.
    pub fn septaphase(&self, field: &ComplexField) -> Result<SeptaphaseVariants, ColorError> {
        let shape = field.shape();
        tracing::debug!(mode = %self.mode, rows = shape.rows, cols = shape.cols, "building septaphase variants");

        let polar = PolarField::from_field(field);
        let parts = CartesianParts::from_field(field);
        let channels = self.channels(&polar)?;
        let hues = discretize(channels.hue(), self.mode);

        let gray = |values: Grid<f64>| assemble(&ChannelSet::grayscale(self.mode, values));

        Ok(SeptaphaseVariants::new([
            assemble(&channels),
            assemble(&channels.with_hue(hues.rounded)?),
            assemble(&channels.with_hue(hues.thresholded)?),
            gray(channels.lightness().clone()),
            gray(polar.phase_degrees().map(|&p| phase_gray(p))),
            gray(parts.real().map(|&v| signed_gray(v))),
            gray(parts.imag().map(|&v| signed_gray(v))),
        ]))
    }

    /// Render a single [`Variant`] of a complex field.
    ///
    /// Produces the same image as `septaphase(field)?.get(variant)` without
    /// building the other six.
    pub fn variant(&self, field: &ComplexField, variant: Variant) -> Result<RgbImage, ColorError> {
        tracing::debug!(mode = %self.mode, %variant, "building single variant");
        let gray = |values: Grid<f64>| assemble(&ChannelSet::grayscale(self.mode, values));
        let image = match variant {
            Variant::Continuous => self.color(field)?,
            Variant::Rounded => {
                let channels = self.channels(&PolarField::from_field(field))?;
                let hue = round_hues(channels.hue(), self.mode);
                assemble(&channels.with_hue(hue)?)
            }
            Variant::Thresholded => {
                let channels = self.channels(&PolarField::from_field(field))?;
                let hue = threshold_hues(channels.hue(), self.mode);
                assemble(&channels.with_hue(hue)?)
            }
            Variant::Lightness => gray(lightness_grid(PolarField::from_field(field).modulus())),
            Variant::Phase => gray(PolarField::from_field(field).phase_degrees().map(|&p| phase_gray(p))),
            Variant::Real => gray(field.values().map(|z| signed_gray(z.re))),
            Variant::Imaginary => gray(field.values().map(|z| signed_gray(z.im))),
        };
        Ok(image)
    }

    fn channels_from(&self, modulus: &Grid<f64>, phase_deg: &Grid<f64>) -> Result<ChannelSet, ColorError> {
        ChannelSet::with_uniform_chroma(
            self.mode,
            hue_grid(phase_deg, self.hue_offset),
            lightness_grid(modulus),
            self.chroma_or_saturation,
        )
    }
}

/// Color a complex field with the defaults of `mode`.
pub fn complex_color(field: &ComplexField, mode: ColorSpaceMode) -> Result<RgbImage, ColorError> {
    DomainColoring::new(mode).color(field)
}

/// Color modulus and phase (radians) grids with the defaults of `mode`.
pub fn complex_color_polar(
    modulus: &Grid<f64>,
    phase: &Grid<f64>,
    mode: ColorSpaceMode,
) -> Result<RgbImage, ColorError> {
    DomainColoring::new(mode).color_polar(modulus, phase)
}

/// Render the seven septaphase variants with the defaults of `mode`.
pub fn complex_color_septaphase(
    field: &ComplexField,
    mode: ColorSpaceMode,
) -> Result<SeptaphaseVariants, ColorError> {
    DomainColoring::new(mode).septaphase(field)
}
