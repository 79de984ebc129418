// Ottosson's matrices and the generated LUT carry more digits than f32 holds
#![allow(clippy::excessive_precision)]

//! domain-color: domain coloring of complex fields
//!
//! This library maps a 2-D grid of complex numbers to an RGB image so that
//! hue encodes phase and lightness encodes modulus. It provides the numeric
//! pipeline only; sampling functions, drawing contours and writing files are
//! left to the caller.
//!
//! # Quick Start
//!
//! The [`DomainColoring`] builder is the primary entry point:
//!
//! ```
//! use domain_color::{ColorSpaceMode, ComplexField, DomainColoring};
//!
//! let x: Vec<f64> = (0..64).map(|i| -2.0 + 4.0 * i as f64 / 63.0).collect();
//! let field = ComplexField::sample(&x, &x, |z| z * z - 1.0);
//!
//! let image = DomainColoring::new(ColorSpaceMode::Oklch).color(&field).unwrap();
//! assert_eq!(image.width(), 64);
//! assert_eq!(image.to_rgb8().len(), 64 * 64 * 3);
//! ```
//!
//! The free functions [`complex_color`], [`complex_color_polar`] and
//! [`complex_color_septaphase`] cover the default configuration of each
//! mode.
//!
//! # Color Spaces
//!
//! Two encodings are available via [`ColorSpaceMode`]:
//!
//! | Mode | Channels (positional) | Hue offset | Middle channel |
//! |------|-----------------------|------------|----------------|
//! | **HSL** | hue, saturation, lightness | 120° | saturation 1.0 |
//! | **OKLCH** | lightness, chroma, hue | 150° | chroma 0.35 |
//!
//! HSL is the classic encoding: bright, fully saturated, but its lightness
//! is not perceptual, so yellow and cyan bands look brighter than blue ones
//! at the same modulus. OKLCH keeps perceived lightness constant around the
//! color wheel at the cost of leaving the sRGB gamut for most hues; those
//! colors are clipped in linear RGB.
//!
//! The positional order differs between the two modes. It is carried by
//! the [`mapping::ColorTriple`] and [`mapping::ChannelSet`] tags, never by
//! convention, and [`mapping::ColorTriple::reinterpret`] is the one place
//! where a triple moves between orders.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ComplexField
//!     |
//!     v
//! PolarField              (|z|, arg z)
//!     |
//!     +---> lightness      r² / (1 + r²)
//!     +---> hue            (deg(arg z) + offset) mod 360
//!     |
//!     v
//! ChannelSet              (tagged with its ColorSpaceMode)
//!     |
//!     +-- HSL ----> hexcone formula -------------------> Srgb
//!     +-- OKLCH --> Oklab --> LinearRgb --> gamma LUT --> Srgb
//!     |
//!     v
//! RgbImage                (NaN -> 1.0, clamp to 0.0..=1.0)
//! ```
//!
//! Numeric anomalies are not errors. A NaN sample saturates every channel
//! to 1.0 so poles and undefined points stand out as white. The only errors
//! are mismatched shapes and unknown names, see [`ColorError`].
//!
//! # Septaphase
//!
//! [`DomainColoring::septaphase`] renders seven [`Variant`]s of one field:
//! the continuous image, hues rounded and floored to 60° bands, and four
//! grayscales (lightness, phase, real part, imaginary part).
//!
//! # Legends and Contours
//!
//! [`colormap`] returns a lazily built, shared phase table per mode for
//! colorbars; [`ContourLevels`] holds the modulus (powers of two) and phase
//! (quarter turns) levels a viewer overlays on the image.

pub mod api;
pub mod color;
pub mod colormap;
pub mod contour;
pub mod field;
pub mod grid;
pub mod mapping;
pub mod mode;
pub mod output;


pub use api::{complex_color, complex_color_polar, complex_color_septaphase, ColorError, DomainColoring};
pub use color::{Hsl, LinearRgb, Oklab, Oklch, Srgb};
pub use colormap::{colormap, Colormap, COLORMAP_SIZE};
pub use contour::{ContourLevels, PHASE_LEVELS_DEG};
pub use field::{CartesianParts, ComplexField, PolarField};
pub use grid::{Grid, Shape};
pub use mode::ColorSpaceMode;
pub use output::{RgbImage, SeptaphaseVariants, Variant};
