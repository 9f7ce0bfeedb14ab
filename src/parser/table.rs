//! Whitespace-delimited numeric table reader.
//!
//! Shared by the timing and grid loaders. Behaves like a plain numeric
//! `loadtxt`: blank lines are skipped, `#` starts a comment that runs to the
//! end of the line, and every data row must have the same column count as the
//! first one.

use crate::utils::config::COMMENT_CHAR;
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A single parsed data row, tagged with its 1-based source line
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub line: usize,
    pub values: Vec<f64>,
}

/// Read a numeric table from any buffered reader
///
/// **Public** - used by the measurement and grid loaders
///
/// # Arguments
/// * `reader` - Source of text lines
/// * `expected_columns` - Required column count, or `None` to take it from the first row
///
/// # Errors
/// * `ParseError::Io` - Read failure
/// * `ParseError::InvalidNumber` - Token that does not parse as `f64`
/// * `ParseError::ColumnCount` - Row width differs from the expected width
pub fn read_table<R: BufRead>(
    reader: R,
    expected_columns: Option<usize>,
) -> Result<Vec<Row>, ParseError> {
    let mut rows = Vec::new();
    let mut width = expected_columns;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let data = strip_comment(&line);
        if data.trim().is_empty() {
            continue;
        }

        let values = parse_row(data, line_no)?;

        match width {
            Some(expected) if expected != values.len() => {
                return Err(ParseError::ColumnCount {
                    line: line_no,
                    expected,
                    found: values.len(),
                });
            }
            Some(_) => {}
            None => width = Some(values.len()),
        }

        rows.push(Row {
            line: line_no,
            values,
        });
    }

    debug!("Read {} data rows ({} columns)", rows.len(), width.unwrap_or(0));

    Ok(rows)
}

/// Open a file and read it as a numeric table
///
/// **Public** - convenience wrapper over [`read_table`]
pub fn load_table(
    path: impl AsRef<Path>,
    expected_columns: Option<usize>,
) -> Result<Vec<Row>, ParseError> {
    let path = path.as_ref();
    debug!("Loading numeric table from: {}", path.display());

    let file = File::open(path)?;
    read_table(BufReader::new(file), expected_columns)
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_CHAR) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_row(data: &str, line: usize) -> Result<Vec<f64>, ParseError> {
    data.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}
