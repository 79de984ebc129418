pub mod contour_overlay;
pub mod png_encoder;

pub use contour_overlay::{overlay_contours, CONTOUR_SHADE};
pub use png_encoder::encode_png;
