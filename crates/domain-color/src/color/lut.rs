//! Gamma lookup table access
//!
//! Fast sRGB gamma encoding using a pre-computed lookup table generated at
//! compile time by build.rs.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/srgb_lut.rs"));

/// Convert a linear RGB value (0.0..=1.0) to sRGB using LUT with linear interpolation.
///
/// # Panics (debug only)
/// Debug-asserts that the input is in the range 0.0..=1.0.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    debug_assert!(
        (0.0..=1.0).contains(&linear),
        "linear_to_srgb: input {linear} out of range 0.0..=1.0"
    );

    // Clamp for safety in release mode
    let linear = linear.clamp(0.0, 1.0);

    // Scale to LUT index range (0..4095)
    let scaled = linear * 4095.0;
    let index = scaled as usize;

    if index >= 4095 {
        return LINEAR_TO_SRGB[4095];
    }

    let frac = scaled - index as f32;
    let a = LINEAR_TO_SRGB[index];
    let b = LINEAR_TO_SRGB[index + 1];
    a + (b - a) * frac
}
