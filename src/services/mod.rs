pub mod functions;
pub mod plot_cache;
pub mod renderer;
pub mod sampler;

pub use functions::ComplexFunction;
pub use plot_cache::{CachedPlot, PlotCache};
pub use renderer::{color_field, render_plot, RenderService};
pub use sampler::{linspace, sample_function};
