pub mod config;
pub mod plot;

pub use config::{AppConfig, PlotConfig, RenderDefaults};
pub use plot::{clamp_dimension, PlotOverrides, PlotSpec, MAX_DIMENSION};
