//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Reading whitespace-delimited numeric tables
//! - Timing measurements (two columns)
//! - Iteration-count grids
//! - Defining the JSON summary schema

pub mod grid;
pub mod measurements;
pub mod schema;
pub mod table;

// Re-export main types
pub use grid::{load_grid, read_grid, Grid};
pub use measurements::{load_measurements, read_measurements, Measurement};
pub use schema::{BucketRecord, TimingSummary};
pub use table::{load_table, read_table, Row};
