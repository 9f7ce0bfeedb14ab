//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the parser, aggregator, plot and output layers.

pub mod generate;
pub mod heatmap;
pub mod models;
pub mod timing;

// Re-export main command functions
pub use generate::{execute_generate, validate_generate_args};
pub use heatmap::{execute_heatmap, validate_heatmap_args};
pub use models::{GenerateArgs, HeatmapArgs, TimingPlotArgs};
pub use timing::{execute_timing_plot, validate_timing_args};
