//! Grid file parser.
//!
//! A grid is a rectangular matrix of iteration counts, one file row per line.

use super::table::{load_table, read_table, Row};
use crate::utils::error::ParseError;
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// Dense row-major matrix of non-negative iteration counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl Grid {
    /// Build a grid from row-major data
    ///
    /// Returns `None` when `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<u32>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Build a grid from nested rows; `None` if the rows are ragged
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let height = rows.len();
        Self::new(height, cols, rows.into_iter().flatten().collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Iterate over the rows as slices
    pub fn row_slices(&self) -> impl Iterator<Item = &[u32]> {
        // chunks() panics on 0
        self.data.chunks(self.cols.max(1))
    }

    /// Smallest and largest value, or `None` for an empty grid
    pub fn value_range(&self) -> Option<(u32, u32)> {
        let min = self.data.iter().copied().min()?;
        let max = self.data.iter().copied().max()?;
        Some((min, max))
    }

    /// Swap rows and columns
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

/// Parse a grid from a buffered reader
pub fn read_grid<R: BufRead>(reader: R) -> Result<Grid, ParseError> {
    let rows = read_table(reader, None)?;
    to_grid(rows)
}

/// Load a grid file
///
/// **Public** - main entry point for heat map input
///
/// # Errors
/// * `ParseError::Io` - File missing or unreadable
/// * `ParseError::InvalidNumber` - Non-numeric token
/// * `ParseError::ColumnCount` - Ragged matrix
/// * `ParseError::InvalidGridValue` - Negative, fractional or oversized value
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, ParseError> {
    let rows = load_table(path, None)?;
    let grid = to_grid(rows)?;

    debug!("Loaded {}x{} grid", grid.rows(), grid.cols());

    Ok(grid)
}

fn to_grid(rows: Vec<Row>) -> Result<Grid, ParseError> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.values.len());
    let mut data = Vec::with_capacity(height * width);

    for row in rows {
        for value in row.values {
            data.push(to_count(value, row.line)?);
        }
    }

    Ok(Grid {
        rows: height,
        cols: width,
        data,
    })
}

fn to_count(value: f64, line: usize) -> Result<u32, ParseError> {
    let valid = value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64;
    if !valid {
        return Err(ParseError::InvalidGridValue { line, value });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_grid_with_header() {
        let text = "#Mandelbrot set data\n#Columns imaginary axis, rows real axis\n0   1   2   \n3   4   5   \n";
        let grid = read_grid(Cursor::new(text)).unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 2), Some(5));
        assert_eq!(grid.value_range(), Some((0, 5)));
    }

    #[test]
    fn test_negative_value_rejected() {
        let result = read_grid(Cursor::new("1 -2\n"));
        assert!(matches!(result, Err(ParseError::InvalidGridValue { line: 1, .. })));
    }

    #[test]
    fn test_fractional_value_rejected() {
        let result = read_grid(Cursor::new("1 2.5\n"));
        assert!(matches!(result, Err(ParseError::InvalidGridValue { .. })));
    }

    #[test]
    fn test_transposed() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = grid.transposed();

        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.get(0, 1), Some(4));
        assert_eq!(t.get(2, 0), Some(3));
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn test_empty_grid() {
        let grid = read_grid(Cursor::new("")).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.value_range(), None);
    }
}
