//! Mandelbrot divergence grid generation.
//!
//! Produces the iteration-count grids the heat map renders, and the timing
//! samples the thread sweep plots.

pub mod generator;

pub use generator::{compute_grid, divergence_count, GenerateReport, MandelbrotConfig};
