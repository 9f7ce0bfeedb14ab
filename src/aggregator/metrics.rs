//! Summaries derived from finalized bucket averages.

use super::averager::BucketAverage;
use super::transform::BucketTransform;
use crate::parser::schema::{BucketRecord, TimingSummary};
use crate::utils::config::SCHEMA_VERSION;
use log::debug;

/// Build the JSON summary document for a finalized sweep
///
/// **Public** - used by the timing commands when `--json` is given
///
/// # Arguments
/// * `transform` - Which sweep the averages belong to
/// * `source` - Input file name, recorded verbatim
/// * `averages` - Output of `finalize`
pub fn to_summary(
    transform: BucketTransform,
    source: &str,
    averages: &[BucketAverage],
) -> TimingSummary {
    let buckets: Vec<BucketRecord> = averages.iter().map(to_record).collect();
    let measurement_count = averages.iter().map(|a| a.count).sum();

    debug!(
        "Summarising {} buckets ({} measurements)",
        buckets.len(),
        measurement_count
    );

    TimingSummary {
        version: SCHEMA_VERSION.to_string(),
        kind: transform.name().to_string(),
        source: source.to_string(),
        measurement_count,
        buckets,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn to_record(average: &BucketAverage) -> BucketRecord {
    BucketRecord {
        label: average.label,
        count: average.count,
        average: (!average.is_empty()).then_some(average.average),
    }
}

/// Quick facts about a sweep, for logging
///
/// **Public** - returned from [`sweep_overview`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepOverview {
    /// Buckets with at least one measurement
    pub populated: usize,

    /// Buckets with none
    pub empty: usize,

    /// Lowest average and its label
    pub fastest: Option<(u32, f64)>,

    /// Highest average and its label
    pub slowest: Option<(u32, f64)>,
}

impl SweepOverview {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        let fmt = |point: Option<(u32, f64)>| match point {
            Some((label, avg)) => format!("{:.4}s @ {}", avg, label),
            None => "n/a".to_string(),
        };
        format!(
            "Populated: {} | Empty: {} | Fastest: {} | Slowest: {}",
            self.populated,
            self.empty,
            fmt(self.fastest),
            fmt(self.slowest)
        )
    }
}

/// Count populated buckets and find the extreme averages
pub fn sweep_overview(averages: &[BucketAverage]) -> SweepOverview {
    let populated: Vec<&BucketAverage> = averages.iter().filter(|a| !a.is_empty()).collect();

    let fastest = populated
        .iter()
        .min_by(|a, b| a.average.total_cmp(&b.average))
        .map(|a| (a.label, a.average));
    let slowest = populated
        .iter()
        .max_by(|a, b| a.average.total_cmp(&b.average))
        .map(|a| (a.label, a.average));

    SweepOverview {
        populated: populated.len(),
        empty: averages.len() - populated.len(),
        fastest,
        slowest,
    }
}
