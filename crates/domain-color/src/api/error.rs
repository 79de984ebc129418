//! Unified error type for the domain-color public API.

use std::fmt;

use thiserror::Error;

/// Errors reported by the domain-color public API.
///
/// Numeric anomalies (NaN, infinities) are deliberately *not* errors: they
/// propagate through the pipeline and saturate to full brightness when the
/// color is assembled.
///
/// # Example
///
/// ```
/// use domain_color::{ColorError, ColorSpaceMode};
///
/// let err = "cmyk".parse::<ColorSpaceMode>().unwrap_err();
/// assert!(matches!(err, ColorError::UnsupportedColorSpace(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Two grids, or a grid and a sample axis, disagree in size.
    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Which input was rejected
        what: &'static str,
        /// Size implied by the reference input
        expected: String,
        /// Size actually supplied
        actual: String,
    },

    /// Color space name outside the supported set.
    #[error("unsupported color space: {0:?} (expected \"hsl\" or \"oklch\")")]
    UnsupportedColorSpace(String),

    /// Septaphase variant name outside the supported set.
    #[error("unknown septaphase variant: {0:?}")]
    UnknownVariant(String),
}

impl ColorError {
    pub(crate) fn shape(
        what: &'static str,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        ColorError::ShapeMismatch {
            what,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
