//! JSON summary output writer.
//!
//! Writes TimingSummary structs to JSON files with proper formatting.

use crate::parser::schema::TimingSummary;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a timing summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(
    summary: &TimingSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let json = summary_to_string(summary)?;
    write_summary_string(&json, output_path)
}

/// Serialize a timing summary to pretty JSON
///
/// **Public** - lets callers serialize before any file is touched
pub fn summary_to_string(summary: &TimingSummary) -> Result<String, OutputError> {
    serde_json::to_string_pretty(summary).map_err(OutputError::SerializationFailed)
}

/// Write already-serialized summary JSON
pub fn write_summary_string(json: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(json.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Summary written successfully ({} bytes)", json.len());

    Ok(())
}

/// Read a timing summary from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<TimingSummary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: TimingSummary =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Summary loaded: version {}, kind {}",
        summary.version, summary.kind
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::BucketRecord;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn create_test_summary() -> TimingSummary {
        TimingSummary {
            version: "1.0.0".to_string(),
            kind: "threads".to_string(),
            source: "omp.dat".to_string(),
            measurement_count: 3,
            buckets: vec![
                BucketRecord {
                    label: 1,
                    count: 2,
                    average: Some(4.0),
                },
                BucketRecord {
                    label: 2,
                    count: 0,
                    average: None,
                },
            ],
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_summary() {
        let summary = create_test_summary();
        let temp_file = NamedTempFile::new().unwrap();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded, summary);
    }

    #[test]
    fn test_empty_bucket_serialized_as_null() {
        let json = serde_json::to_string(&create_test_summary()).unwrap();
        assert!(json.contains(r#""average":null"#));
    }

    #[test]
    fn test_write_summary_into_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_summary(&create_test_summary(), temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_summary("no/such/summary.json"),
            Err(OutputError::WriteFailed(_))
        ));
    }
}
