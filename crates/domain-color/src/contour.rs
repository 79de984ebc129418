//! Contour level sets that accompany a domain-colored image.
//!
//! Iso-modulus curves are drawn at powers of two, so neighbouring contours
//! differ by a constant factor; iso-phase curves at quarter turns.

/// Smallest modulus exponent: `2^-7`.
pub const MODULUS_EXPONENT_MIN: i32 = -7;
/// Largest modulus exponent: `2^15`.
pub const MODULUS_EXPONENT_MAX: i32 = 15;

/// Phase levels in degrees, ascending.
pub const PHASE_LEVELS_DEG: [f64; 5] = [-180.0, -90.0, 0.0, 90.0, 180.0];

/// Modulus and phase levels for contour overlays.
///
/// ```
/// use domain_color::ContourLevels;
///
/// let levels = ContourLevels::standard();
/// assert_eq!(levels.modulus().len(), 23);
/// assert_eq!(levels.modulus()[7], 1.0);
/// assert_eq!(levels.phase_deg(), &[-180.0, -90.0, 0.0, 90.0, 180.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevels {
    modulus: Vec<f64>,
    phase_deg: Vec<f64>,
}

impl ContourLevels {
    /// Powers of two from `2^-7` to `2^15` and the five quarter-turn phases.
    pub fn standard() -> Self {
        Self {
            modulus: modulus_levels(),
            phase_deg: PHASE_LEVELS_DEG.to_vec(),
        }
    }

    /// Ascending modulus levels.
    #[inline]
    pub fn modulus(&self) -> &[f64] {
        &self.modulus
    }

    /// Ascending phase levels in degrees.
    #[inline]
    pub fn phase_deg(&self) -> &[f64] {
        &self.phase_deg
    }
}

impl Default for ContourLevels {
    fn default() -> Self {
        Self::standard()
    }
}

/// `2^k` for `k` in `MODULUS_EXPONENT_MIN..=MODULUS_EXPONENT_MAX`, ascending.
pub fn modulus_levels() -> Vec<f64> {
    (MODULUS_EXPONENT_MIN..=MODULUS_EXPONENT_MAX)
        .map(|k| 2f64.powi(k))
        .collect()
}

/// Number of `levels` at or below `value`; `None` for NaN.
///
/// `levels` must be ascending. Two samples lie in the same band exactly when
/// their indices are equal, which is what the overlay rasterizer compares.
///
/// ```
/// use domain_color::contour::band_index;
///
/// let levels = [1.0, 2.0, 4.0];
/// assert_eq!(band_index(&levels, 0.5), Some(0));
/// assert_eq!(band_index(&levels, 2.0), Some(2));
/// assert_eq!(band_index(&levels, 100.0), Some(3));
/// assert_eq!(band_index(&levels, f64::NAN), None);
/// ```
pub fn band_index(levels: &[f64], value: f64) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    Some(levels.partition_point(|&level| level <= value))
}
