//! Sweep Plot
//!
//! Timing-sweep aggregation and plotting for parallel benchmark runs.
//!
//! The crate reads whitespace-separated timing files produced by processor
//! and thread sweeps, averages repeated runs into fixed buckets, and renders
//! the averages as SVG scatter plots. It also generates and renders the
//! Mandelbrot divergence grid used as the benchmark workload.
//!
//! ## Getting Started
//!
//! ```bash
//! sweep-plot generate --threads 4 --record omp.dat
//! sweep-plot omp --summary
//! sweep-plot mandelbrot
//! ```

pub mod aggregator;
pub mod commands;
pub mod mandelbrot;
pub mod output;
pub mod parser;
pub mod plot;
pub mod utils;
