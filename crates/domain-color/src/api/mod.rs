//! Public API for the domain-color crate.
//!
//! This module provides the high-level API: the [`DomainColoring`] builder,
//! its free-function shortcuts and the [`ColorError`] error type.

mod builder;
mod error;

pub use builder::{complex_color, complex_color_polar, complex_color_septaphase, DomainColoring};
pub use error::ColorError;
