//! The complex-to-color mapping pipeline.
//!
//! ```text
//! PolarField ─┬─ modulus ──> lightness()  ─────────────┐
//!             └─ phase ────> phase_to_hue(offset) ──┐  │
//!                    mode.chroma_or_saturation() ─┐ │  │
//!                                                 v v  v
//!                                              ChannelSet ──> assemble() ──> RgbImage
//!                                                   │
//!                                          septaphase::discretize()
//! ```

pub mod assemble;
pub mod channels;
pub mod hue;
pub mod lightness;
pub mod septaphase;
pub mod triple;

pub use assemble::assemble;
pub use channels::ChannelSet;
pub use hue::{normalize_hue, phase_to_hue};
pub use lightness::{lightness, HSL_SATURATION, OKLCH_CHROMA};
pub use septaphase::{
    discretize, floor_to_sextant, round_hues, round_to_sextant, threshold_hues, DiscreteHues,
};
pub use triple::ColorTriple;
