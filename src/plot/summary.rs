//! Console table of bucket averages.

use crate::aggregator::{BucketAverage, BucketTransform};

/// Width of the longest bar in the inline chart
const BAR_WIDTH: f64 = 40.0;

/// Create a text summary with counts, averages and a bar per bucket
pub fn generate_text_summary(transform: BucketTransform, averages: &[BucketAverage]) -> String {
    let mut lines = Vec::new();

    let slowest = averages
        .iter()
        .filter(|a| a.average.is_finite())
        .map(|a| a.average)
        .fold(0.0, f64::max);

    let heading = match transform {
        BucketTransform::Processors => "PROCESSORS",
        BucketTransform::Threads => "THREADS",
    };

    lines.push("  ┏━━━━━━━━━━━━┳━━━━━━━━┳━━━━━━━━━━━━━━┓".to_string());
    lines.push(format!("  ┃ {:^10} ┃ {:^6} ┃ {:^12} ┃", heading, "RUNS", "AVG (s)"));
    lines.push("  ┣━━━━━━━━━━━━╋━━━━━━━━╋━━━━━━━━━━━━━━┫".to_string());

    for average in averages {
        let shown = if average.is_empty() {
            format!("{:>12}", "-")
        } else {
            format!("{:>12.4}", average.average)
        };
        let bar = if average.average.is_finite() && slowest > 0.0 {
            "█".repeat((average.average / slowest * BAR_WIDTH).round() as usize)
        } else {
            String::new()
        };

        lines.push(format!(
            "  ┃ {:>10} ┃ {:>6} ┃ {} ┃ {}",
            average.label, average.count, shown, bar
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━┻━━━━━━━━┻━━━━━━━━━━━━━━┛".to_string());

    lines.join("\n")
}
