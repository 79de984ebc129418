//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - [`Hsl`]: hue/saturation/lightness over the sRGB primaries
//! - [`Oklch`] / [`Oklab`]: perceptually uniform space for the perceptual mode
//! - [`LinearRgb`]: gamut clipping between OKLab and sRGB
//! - [`Srgb`]: the output encoding of every image pixel
//!
//! # Example
//!
//! ```
//! use domain_color::{LinearRgb, Oklab, Oklch, Srgb};
//!
//! let lch = Oklch::from_degrees(0.7, 0.1, 40.0);
//! let srgb = Srgb::from(LinearRgb::from(Oklab::from(lch)));
//! assert!(srgb.is_valid());
//! ```

mod hsl;
mod linear_rgb;
mod lut;
mod oklab;
mod oklch;
mod srgb;

pub use hsl::Hsl;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use srgb::Srgb;

/// Clamp a channel into 0.0..=1.0, sending NaN to 1.0.
#[inline]
pub fn sanitize_channel(value: f32) -> f32 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
