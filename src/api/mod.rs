pub mod color;
pub mod legend;
pub mod plot;

pub use color::{handle_color, ColorRequest, __path_handle_color};
pub use legend::{
    handle_colormap, handle_contours, ColormapQuery, ColormapResponse, ColormapSample,
    ContoursResponse, __path_handle_colormap, __path_handle_contours,
};
pub use plot::{handle_list_plots, handle_plot, PlotInfo, __path_handle_list_plots, __path_handle_plot};
