//! Two-column timing file parser.
//!
//! Each data line holds a key (processor or thread count) and an elapsed
//! time in seconds.

use super::table::{load_table, read_table, Row};
use crate::utils::error::ParseError;
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// Columns required in a timing file
const TIMING_COLUMNS: usize = 2;

/// One timing sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Processor or thread count, as written in the file
    pub key: f64,

    /// Elapsed time in seconds
    pub value: f64,
}

impl Measurement {
    pub fn new(key: f64, value: f64) -> Self {
        Self { key, value }
    }
}

impl From<(f64, f64)> for Measurement {
    fn from((key, value): (f64, f64)) -> Self {
        Self::new(key, value)
    }
}

/// Parse measurements from a buffered reader
///
/// **Public** - used by tests and by [`load_measurements`]
pub fn read_measurements<R: BufRead>(reader: R) -> Result<Vec<Measurement>, ParseError> {
    let rows = read_table(reader, Some(TIMING_COLUMNS))?;
    Ok(rows.into_iter().map(to_measurement).collect())
}

/// Load measurements from a timing file
///
/// **Public** - main entry point for timing input
///
/// # Errors
/// * `ParseError::Io` - File missing or unreadable
/// * `ParseError::InvalidNumber` - Non-numeric token
/// * `ParseError::ColumnCount` - Line without exactly two columns
pub fn load_measurements(path: impl AsRef<Path>) -> Result<Vec<Measurement>, ParseError> {
    let rows = load_table(path, Some(TIMING_COLUMNS))?;
    let measurements: Vec<Measurement> = rows.into_iter().map(to_measurement).collect();

    debug!("Loaded {} measurements", measurements.len());

    Ok(measurements)
}

fn to_measurement(row: Row) -> Measurement {
    Measurement::new(row.values[0], row.values[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_measurements() {
        let text = "#threads seconds\n1 3.0\n2 4.5e0\n";
        let measurements = read_measurements(Cursor::new(text)).unwrap();

        assert_eq!(
            measurements,
            vec![Measurement::new(1.0, 3.0), Measurement::new(2.0, 4.5)]
        );
    }

    #[test]
    fn test_three_columns_rejected() {
        let result = read_measurements(Cursor::new("1 2 3\n"));
        assert!(matches!(result, Err(ParseError::ColumnCount { .. })));
    }

    #[test]
    fn test_empty_input_is_empty() {
        let measurements = read_measurements(Cursor::new("# nothing\n")).unwrap();
        assert!(measurements.is_empty());
    }
}
