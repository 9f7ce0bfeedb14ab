//! Output JSON schema definitions for timing summaries.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level summary structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Sweep kind ("processors" or "threads")
    pub kind: String,

    /// Input file the measurements were read from
    pub source: String,

    /// Number of measurements ingested
    pub measurement_count: usize,

    /// Per-bucket averages, in bucket order
    pub buckets: Vec<BucketRecord>,

    /// Timestamp when summary was generated
    pub generated_at: String,
}

/// One averaged bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRecord {
    /// Nominal processor/thread count
    pub label: u32,

    /// Measurements that landed in the bucket
    pub count: usize,

    /// Mean elapsed seconds (`null` for an empty bucket)
    pub average: Option<f64>,
}
