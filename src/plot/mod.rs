//! SVG plot generation.
//!
//! This module turns bucket averages into scatter plots and grids into
//! color-mapped heat maps, drawn with `plotters` on its SVG backend. Both
//! render to an in-memory SVG string; writing is left to the output module.

pub mod colormap;
pub mod heatmap;
pub mod scatter;
pub mod summary;

// Re-export main types
pub use colormap::{hot_r, ColorScale, Rgb};
pub use heatmap::{cell_runs, downsample, render_heatmap, CellField, CellRun, HeatmapConfig};
pub use scatter::{render_scatter, scatter_points, visible_points, ScatterConfig};
pub use summary::generate_text_summary;
