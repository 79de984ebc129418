//! Phasecolor - domain coloring of complex functions
//!
//! HTTP server and CLI on top of the `domain_color` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
