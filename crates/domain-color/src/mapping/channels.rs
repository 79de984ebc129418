//! Three same-shape channel grids tagged with their color space.

use crate::api::ColorError;
use crate::grid::{Grid, Shape};
use crate::mode::ColorSpaceMode;

use super::triple::ColorTriple;

/// Hue, middle channel (saturation or chroma) and lightness grids for one
/// color space.
///
/// The fields are stored by name; [`ordered`](Self::ordered) yields them in
/// the positional order of the mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSet {
    mode: ColorSpaceMode,
    hue: Grid<f64>,
    chroma_or_saturation: Grid<f64>,
    lightness: Grid<f64>,
}

impl ChannelSet {
    /// Bundle three grids; all must share one shape.
    pub fn new(
        mode: ColorSpaceMode,
        hue: Grid<f64>,
        chroma_or_saturation: Grid<f64>,
        lightness: Grid<f64>,
    ) -> Result<Self, ColorError> {
        hue.ensure_same_shape(&chroma_or_saturation, "chroma/saturation channel")?;
        hue.ensure_same_shape(&lightness, "lightness channel")?;
        Ok(Self {
            mode,
            hue,
            chroma_or_saturation,
            lightness,
        })
    }

    /// Bundle hue and lightness with a constant middle channel.
    pub fn with_uniform_chroma(
        mode: ColorSpaceMode,
        hue: Grid<f64>,
        lightness: Grid<f64>,
        chroma_or_saturation: f64,
    ) -> Result<Self, ColorError> {
        let middle = hue.map(|_| chroma_or_saturation);
        Self::new(mode, hue, middle, lightness)
    }

    /// Achromatic channels: zero saturation/chroma, hue 0.
    pub fn grayscale(mode: ColorSpaceMode, lightness: Grid<f64>) -> Self {
        Self {
            mode,
            hue: lightness.map(|_| 0.0),
            chroma_or_saturation: lightness.map(|_| 0.0),
            lightness,
        }
    }

    /// Same lightness and middle channel, new hue grid.
    pub fn with_hue(&self, hue: Grid<f64>) -> Result<Self, ColorError> {
        Self::new(
            self.mode,
            hue,
            self.chroma_or_saturation.clone(),
            self.lightness.clone(),
        )
    }

    #[inline]
    pub fn mode(&self) -> ColorSpaceMode {
        self.mode
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.hue.shape()
    }

    #[inline]
    pub fn hue(&self) -> &Grid<f64> {
        &self.hue
    }

    #[inline]
    pub fn chroma_or_saturation(&self) -> &Grid<f64> {
        &self.chroma_or_saturation
    }

    #[inline]
    pub fn lightness(&self) -> &Grid<f64> {
        &self.lightness
    }

    /// The three grids in the mode's positional order: (H, S, L) for HSL,
    /// (L, C, H) for OKLCH.
    pub fn ordered(&self) -> [&Grid<f64>; 3] {
        match self.mode {
            ColorSpaceMode::Hsl => [&self.hue, &self.chroma_or_saturation, &self.lightness],
            ColorSpaceMode::Oklch => [&self.lightness, &self.chroma_or_saturation, &self.hue],
        }
    }

    /// The triple stored at row-major index `index`.
    ///
    /// # Panics
    /// Panics when `index` is out of bounds.
    pub fn triple(&self, index: usize) -> ColorTriple {
        ColorTriple::new(
            self.mode,
            self.hue.as_slice()[index],
            self.chroma_or_saturation.as_slice()[index],
            self.lightness.as_slice()[index],
        )
    }

    /// All triples in row-major order.
    pub fn triples(&self) -> impl Iterator<Item = ColorTriple> + '_ {
        (0..self.hue.len()).map(move |i| self.triple(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(rows: usize, cols: usize, value: f64) -> Grid<f64> {
        Grid::from_fn(rows, cols, |_, _| value)
    }

    #[test]
    fn test_new_rejects_mismatched_channels() {
        let err = ChannelSet::new(
            ColorSpaceMode::Hsl,
            constant(2, 2, 0.0),
            constant(2, 2, 1.0),
            constant(2, 3, 0.5),
        )
        .unwrap_err();
        assert!(matches!(err, ColorError::ShapeMismatch { what: "lightness channel", .. }));
    }

    #[test]
    fn test_ordered_follows_mode() {
        let hsl = ChannelSet::new(
            ColorSpaceMode::Hsl,
            constant(1, 1, 200.0),
            constant(1, 1, 1.0),
            constant(1, 1, 0.4),
        )
        .unwrap();
        let [a, b, c] = hsl.ordered();
        assert_eq!((a[(0, 0)], b[(0, 0)], c[(0, 0)]), (200.0, 1.0, 0.4));

        let lch = ChannelSet::new(
            ColorSpaceMode::Oklch,
            constant(1, 1, 200.0),
            constant(1, 1, 0.35),
            constant(1, 1, 0.4),
        )
        .unwrap();
        let [a, b, c] = lch.ordered();
        assert_eq!((a[(0, 0)], b[(0, 0)], c[(0, 0)]), (0.4, 0.35, 200.0));
    }

    #[test]
    fn test_triple_matches_ordered() {
        let set = ChannelSet::with_uniform_chroma(
            ColorSpaceMode::Oklch,
            Grid::from_fn(2, 2, |r, c| (r * 2 + c) as f64 * 90.0),
            constant(2, 2, 0.6),
            0.35,
        )
        .unwrap();
        for (i, triple) in set.triples().enumerate() {
            let ordered = set.ordered().map(|g| g.as_slice()[i]);
            assert_eq!(triple.positional(), ordered);
        }
    }

    #[test]
    fn test_grayscale_has_no_chroma() {
        let set = ChannelSet::grayscale(ColorSpaceMode::Hsl, constant(2, 3, 0.3));
        assert!(set.chroma_or_saturation().iter().all(|&v| v == 0.0));
        assert_eq!(set.shape(), Shape::new(2, 3));
    }
}
