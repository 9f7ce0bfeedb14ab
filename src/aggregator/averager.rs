//! Bucketed averaging of sparse integer-keyed measurements.
//!
//! Two-pass: every measurement is accumulated first (count and sum per
//! bucket), then each bucket is divided once in `finalize`.

use super::transform::BucketTransform;
use crate::parser::Measurement;
use crate::utils::config::BUCKET_COUNT;
use crate::utils::error::AggregateError;
use log::{debug, warn};

/// What `finalize` does with a bucket that received no measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyBucketPolicy {
    /// Fail with [`AggregateError::EmptyBucket`] naming the first empty bucket
    #[default]
    Fail,

    /// Report `NaN` as the average and keep going
    Sentinel,
}

/// Running count and sum for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Accumulator {
    count: usize,
    sum: f64,
}

/// Averaged result for one bucket
///
/// **Public** - returned from `finalize`, consumed by plots and summaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketAverage {
    /// Bucket index, 0-based
    pub index: usize,

    /// Nominal processor/thread count for this bucket
    pub label: u32,

    /// Measurements ingested into this bucket
    pub count: usize,

    /// Plain sum of the ingested values
    pub sum: f64,

    /// `sum / count`; `NaN` for an empty bucket under the sentinel policy
    pub average: f64,
}

impl BucketAverage {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Fixed-size bucket accumulator
#[derive(Debug, Clone)]
pub struct BucketedAverager {
    transform: BucketTransform,
    buckets: Vec<Accumulator>,
}

impl BucketedAverager {
    /// Create an averager with [`BUCKET_COUNT`] empty buckets
    pub fn new(transform: BucketTransform) -> Self {
        Self {
            transform,
            buckets: vec![Accumulator::default(); BUCKET_COUNT],
        }
    }

    pub fn transform(&self) -> BucketTransform {
        self.transform
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Per-bucket measurement counts, in index order
    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    /// Validate a key and return its bucket index
    fn bucket_index(&self, key: f64) -> Result<usize, AggregateError> {
        let bucket_count = self.buckets.len();
        let out_of_range = |index| AggregateError::KeyOutOfRange {
            key,
            index,
            bucket_count,
        };

        let index = self.transform.index(key).ok_or(out_of_range(-1))?;
        if index < 0 || index >= bucket_count as i64 {
            return Err(out_of_range(index));
        }

        let index = index as usize;
        if self.transform.label(index) as f64 != key {
            warn!(
                "Key {} is not a nominal {} count; counted under {}",
                key,
                self.transform,
                self.transform.label(index)
            );
        }

        Ok(index)
    }

    /// Ingest a single measurement
    ///
    /// # Returns
    /// The bucket index the measurement landed in
    pub fn push(&mut self, measurement: Measurement) -> Result<usize, AggregateError> {
        let index = self.bucket_index(measurement.key)?;
        let bucket = &mut self.buckets[index];
        bucket.count += 1;
        bucket.sum += measurement.value;
        Ok(index)
    }

    /// Ingest a sequence of measurements
    ///
    /// **Public** - first pass of the averaging pipeline
    ///
    /// All keys are validated before any bucket is touched, so a failed call
    /// leaves the accumulator unchanged.
    ///
    /// # Errors
    /// * `AggregateError::KeyOutOfRange` - A key maps outside `0..BUCKET_COUNT`
    pub fn ingest(&mut self, measurements: &[Measurement]) -> Result<(), AggregateError> {
        let indices = measurements
            .iter()
            .map(|m| self.bucket_index(m.key))
            .collect::<Result<Vec<_>, _>>()?;

        for (index, measurement) in indices.into_iter().zip(measurements) {
            let bucket = &mut self.buckets[index];
            bucket.count += 1;
            bucket.sum += measurement.value;
        }

        debug!("Bucket counts: {:?}", self.counts());

        Ok(())
    }

    /// Divide every bucket and produce the ordered averages
    ///
    /// **Public** - second pass of the averaging pipeline
    ///
    /// # Errors
    /// * `AggregateError::EmptyBucket` - Under [`EmptyBucketPolicy::Fail`], the
    ///   lowest-indexed bucket with no measurements
    pub fn finalize(self, policy: EmptyBucketPolicy) -> Result<Vec<BucketAverage>, AggregateError> {
        let transform = self.transform;
        let mut averages = Vec::with_capacity(self.buckets.len());

        for (index, bucket) in self.buckets.into_iter().enumerate() {
            let label = transform.label(index);

            if bucket.count == 0 && policy == EmptyBucketPolicy::Fail {
                return Err(AggregateError::EmptyBucket { index, label });
            }

            let average = if bucket.count == 0 {
                f64::NAN
            } else {
                bucket.sum / bucket.count as f64
            };

            averages.push(BucketAverage {
                index,
                label,
                count: bucket.count,
                sum: bucket.sum,
                average,
            });
        }

        debug!(
            "Bucket averages: {:?}",
            averages.iter().map(|a| a.average).collect::<Vec<_>>()
        );

        Ok(averages)
    }
}

/// Ingest and finalize in one call with a fresh accumulator
///
/// **Public** - convenience for command drivers and tests
pub fn average_measurements(
    transform: BucketTransform,
    measurements: &[Measurement],
    policy: EmptyBucketPolicy,
) -> Result<Vec<BucketAverage>, AggregateError> {
    let mut averager = BucketedAverager::new(transform);
    averager.ingest(measurements)?;
    averager.finalize(policy)
}
