//! Phase colormap tables for legends and colorbars.
//!
//! One table per [`ColorSpaceMode`], built on first use and shared
//! read-only for the life of the process.

use std::f64::consts::{PI, TAU};
use std::sync::LazyLock;

use crate::color::Srgb;
use crate::mapping::{lightness, phase_to_hue, ColorTriple};
use crate::mode::ColorSpaceMode;

/// Number of samples in every colormap table.
pub const COLORMAP_SIZE: usize = 1024;

static HSL_COLORMAP: LazyLock<Colormap> = LazyLock::new(|| Colormap::build(ColorSpaceMode::Hsl));
static OKLCH_COLORMAP: LazyLock<Colormap> = LazyLock::new(|| Colormap::build(ColorSpaceMode::Oklch));

/// The shared colormap of `mode`.
///
/// ```
/// use domain_color::{colormap, ColorSpaceMode};
///
/// let map = colormap(ColorSpaceMode::Oklch);
/// assert_eq!(map.len(), 1024);
/// assert_eq!(map.phase(0), -std::f64::consts::PI);
/// ```
pub fn colormap(mode: ColorSpaceMode) -> &'static Colormap {
    match mode {
        ColorSpaceMode::Hsl => &HSL_COLORMAP,
        ColorSpaceMode::Oklch => &OKLCH_COLORMAP,
    }
}

/// Colors of unit-modulus samples evenly spaced over phase `[-π, π)`.
///
/// Entry `k` is at phase `-π + 2πk/N`; `+π` is not repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    mode: ColorSpaceMode,
    colors: Vec<Srgb>,
}

impl Colormap {
    fn build(mode: ColorSpaceMode) -> Self {
        let unit = lightness(1.0);
        let colors = (0..COLORMAP_SIZE)
            .map(|k| {
                let hue = phase_to_hue(sample_phase(k).to_degrees(), mode.hue_offset());
                ColorTriple::new(mode, hue, mode.chroma_or_saturation(), unit).to_srgb()
            })
            .collect();
        Self { mode, colors }
    }

    #[inline]
    pub fn mode(&self) -> ColorSpaceMode {
        self.mode
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Phase (radians) of entry `index`.
    #[inline]
    pub fn phase(&self, index: usize) -> f64 {
        sample_phase(index)
    }

    /// Nearest table color for a phase in radians, wrapping around the
    /// circle. Non-finite phases map to white.
    pub fn lookup(&self, phase: f64) -> Srgb {
        if !phase.is_finite() {
            return Srgb::WHITE;
        }
        let n = self.colors.len() as i64;
        let position = ((phase + PI) / TAU * n as f64).round() as i64;
        self.colors[position.rem_euclid(n) as usize]
    }
}

#[inline]
fn sample_phase(index: usize) -> f64 {
    -PI + TAU * index as f64 / COLORMAP_SIZE as f64
}
