//! Phase to hue.

use crate::grid::Grid;

/// Fold any angle in degrees into [0, 360).
///
/// `rem_euclid` can round a tiny negative angle up to exactly 360.0; that
/// case is folded to 0. NaN propagates.
#[inline]
pub fn normalize_hue(degrees: f64) -> f64 {
    let hue = degrees.rem_euclid(360.0);
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Rotate a phase (degrees) by `offset` and fold into [0, 360).
///
/// A pure rotation: distinct phases stay distinct hues.
#[inline]
pub fn phase_to_hue(phase_deg: f64, offset: f64) -> f64 {
    normalize_hue(phase_deg + offset)
}

/// Apply [`phase_to_hue`] to every cell.
pub fn hue_grid(phase_deg: &Grid<f64>, offset: f64) -> Grid<f64> {
    phase_deg.map(|&p| phase_to_hue(p, offset))
}
