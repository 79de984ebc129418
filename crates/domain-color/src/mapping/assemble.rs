//! The color assembler.

use crate::output::RgbImage;

use super::channels::ChannelSet;

/// Convert a channel set into a fresh sanitized RGB image.
///
/// Each cell is converted with the formulas of the set's mode, then every
/// channel is clamped into 0.0..=1.0 with NaN sent to 1.0. The input grids
/// are only read.
pub fn assemble(channels: &ChannelSet) -> RgbImage {
    let shape = channels.shape();
    let pixels = channels.triples().map(|t| t.to_srgb()).collect();
    RgbImage::new(pixels, shape.cols, shape.rows)
}
