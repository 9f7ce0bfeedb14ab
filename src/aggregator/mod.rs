//! Aggregation of timing measurements into per-bucket averages.
//!
//! This module transforms parsed measurements into:
//! - Bucket indices (processor or thread transform)
//! - Per-bucket averages
//! - Sweep summaries for logging and JSON output

pub mod averager;
pub mod metrics;
pub mod transform;

// Re-export main types and functions
pub use averager::{average_measurements, BucketAverage, BucketedAverager, EmptyBucketPolicy};
pub use metrics::{sweep_overview, to_summary, SweepOverview};
pub use transform::BucketTransform;
