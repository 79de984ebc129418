//! Septaphase discretization.
//!
//! Partitions the hue circle into six 60° bands. Together with the
//! continuous rendering this gives the seven-way view the variant set is
//! named after.

use std::f64::consts::PI;

use crate::grid::Grid;
use crate::mode::ColorSpaceMode;

use super::hue::normalize_hue;

/// Width of one septaphase band in degrees.
pub const SEXTANT_DEG: f64 = 60.0;

/// Snap a hue to the nearest multiple of 60°, folded into [0, 360).
///
/// Ties (30°, 90°, ...) round away from zero, i.e. upwards for hues.
#[inline]
pub fn round_to_sextant(hue: f64) -> f64 {
    normalize_hue(SEXTANT_DEG * (hue / SEXTANT_DEG).round())
}

/// Snap a hue down to the multiple of 60° below it.
///
/// Bands are half-open: `[60k, 60(k+1))`.
#[inline]
pub fn floor_to_sextant(hue: f64) -> f64 {
    normalize_hue(SEXTANT_DEG * (hue / SEXTANT_DEG).floor())
}

/// The two discretized hue fields derived from one continuous hue field.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteHues {
    /// Nearest multiple of 60°
    pub rounded: Grid<f64>,
    /// Multiple of 60° at or below
    pub thresholded: Grid<f64>,
}

/// Discretize a hue field for `mode`.
///
/// Bands are laid out in a frame rotated by
/// [`ColorSpaceMode::septaphase_rotation`] (−30° for OKLCH) so their edges
/// fall between named hues. The rotation is undone after snapping, so the
/// result stays in the input's hue frame and discretizing it again is the
/// identity.
pub fn discretize(hue: &Grid<f64>, mode: ColorSpaceMode) -> DiscreteHues {
    DiscreteHues {
        rounded: round_hues(hue, mode),
        thresholded: threshold_hues(hue, mode),
    }
}

/// The `rounded` half of [`discretize`].
pub fn round_hues(hue: &Grid<f64>, mode: ColorSpaceMode) -> Grid<f64> {
    snap_aligned(hue, mode, round_to_sextant)
}

/// The `thresholded` half of [`discretize`].
pub fn threshold_hues(hue: &Grid<f64>, mode: ColorSpaceMode) -> Grid<f64> {
    snap_aligned(hue, mode, floor_to_sextant)
}

fn snap_aligned(hue: &Grid<f64>, mode: ColorSpaceMode, snap: fn(f64) -> f64) -> Grid<f64> {
    let rotation = mode.septaphase_rotation();
    hue.map(|&h| normalize_hue(snap(normalize_hue(h + rotation)) - rotation))
}

/// Gray level for a phase in degrees: −180° → 0, 180° → 1.
#[inline]
pub fn phase_gray(phase_deg: f64) -> f64 {
    (phase_deg + 180.0) / 360.0
}

/// Gray level for a signed real value: 0 → 0.5, ±∞ → 1 / 0.
#[inline]
pub fn signed_gray(value: f64) -> f64 {
    0.5 + value.atan() / PI
}
