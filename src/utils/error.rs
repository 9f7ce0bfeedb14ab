//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading numeric input files
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("Line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: grid values must be non-negative integers, found {value}")]
    InvalidGridValue { line: usize, value: f64 },
}

/// Errors that can occur while bucketing and averaging measurements
#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    #[error("Key {key} maps to bucket {index}, outside 0..{bucket_count}")]
    KeyOutOfRange {
        key: f64,
        index: i64,
        bucket_count: usize,
    },

    #[error("Bucket {index} (label {label}) has no measurements; cannot average")]
    EmptyBucket { index: usize, label: u32 },
}

/// Errors that can occur during plot rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Empty grid data")]
    EmptyGrid,

    #[error("No finite points to plot")]
    EmptySeries,

    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

/// Errors that can occur while generating the divergence grid
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid generator settings: {0}")]
    InvalidConfig(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
