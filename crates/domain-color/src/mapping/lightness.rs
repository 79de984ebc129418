//! Modulus to lightness.

use crate::grid::Grid;

/// Fixed OKLCH chroma used by the perceptual mode.
pub const OKLCH_CHROMA: f64 = 0.35;

/// Fixed HSL saturation used by the HSL mode.
pub const HSL_SATURATION: f64 = 1.0;

/// Saturating map from modulus to lightness: `r² / (1 + r²)`.
///
/// Monotonic on [0, ∞), sends 0 to 0, 1 to 0.5 and ∞ to 1. Evaluated as
/// `1 / (1 + r⁻²)` so huge finite moduli reach 1 instead of `inf / inf`.
/// NaN propagates.
///
/// ```
/// use domain_color::mapping::lightness;
///
/// assert_eq!(lightness(0.0), 0.0);
/// assert_eq!(lightness(1.0), 0.5);
/// assert_eq!(lightness(f64::INFINITY), 1.0);
/// ```
#[inline]
pub fn lightness(modulus: f64) -> f64 {
    1.0 / (1.0 + (modulus * modulus).recip())
}

/// Apply [`lightness`] to every cell.
pub fn lightness_grid(modulus: &Grid<f64>) -> Grid<f64> {
    modulus.map(|&r| lightness(r))
}
