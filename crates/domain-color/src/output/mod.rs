//! Output types of the mapping pipeline.
//!
//! - [`RgbImage`]: one sanitized sRGB image
//! - [`SeptaphaseVariants`]: the seven renderings of one field, keyed by
//!   [`Variant`]

mod rgb_image;
mod variants;

pub use rgb_image::RgbImage;
pub use variants::{SeptaphaseVariants, Variant};
