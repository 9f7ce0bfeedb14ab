//! Grid data file writer and timing record appender.
//!
//! Grid files carry three `#` header lines followed by one line per real-axis
//! row. Each value is followed by three spaces.

use crate::parser::Grid;
use crate::utils::error::OutputError;
use log::info;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render a grid in the data file format
///
/// # Arguments
/// * `grid` - Divergence counts, rows along the real axis
/// * `max_iter` - Iteration cap the grid was computed with
pub fn format_grid(grid: &Grid, max_iter: u32) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    write_grid_to(&mut buf, grid, max_iter)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a grid data file
///
/// **Public** - used by the generate command
pub fn write_grid(grid: &Grid, max_iter: u32, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {}x{} grid to: {}", grid.rows(), grid.cols(), output_path.display());

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_grid_to(&mut writer, grid, max_iter)?;
    writer.flush()?;

    Ok(())
}

fn write_grid_to<W: Write>(writer: &mut W, grid: &Grid, max_iter: u32) -> std::io::Result<()> {
    writer.write_all(b"#Mandelbrot set data\n")?;
    writer.write_all(b"#Columns imaginary axis, rows real axis\n")?;
    writeln!(
        writer,
        "#Number: one less than number of iterations before diverging.  Max: {}",
        max_iter.saturating_sub(1)
    )?;
    for row in grid.row_slices() {
        for value in row {
            write!(writer, "{}   ", value)?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Append one `threads seconds` line to a timing file
///
/// **Public** - lets generator runs feed the thread-sweep plot
pub fn append_timing_record(
    output_path: impl AsRef<Path>,
    threads: usize,
    seconds: f64,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)?;
    writeln!(file, "{}   {:e}", threads, seconds)?;

    info!("Recorded timing ({} threads, {:.3}s) in {}", threads, seconds, output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{load_grid, load_measurements, Measurement};

    fn sample_grid() -> Grid {
        Grid::from_rows(vec![vec![0, 12, 999], vec![3, 4, 5]]).unwrap()
    }

    #[test]
    fn test_format_grid() {
        let text = format_grid(&sample_grid(), 1000).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "#Mandelbrot set data");
        assert!(lines[2].ends_with("Max: 999"));
        assert_eq!(lines[3], "0   12   999   ");
    }

    #[test]
    fn test_write_grid_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("output.dat");

        write_grid(&sample_grid(), 1000, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), format_grid(&sample_grid(), 1000).unwrap());
        assert_eq!(load_grid(&path).unwrap(), sample_grid());
    }

    #[test]
    fn test_append_timing_record() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("omp.dat");

        append_timing_record(&path, 4, 1.5).unwrap();
        append_timing_record(&path, 8, 0.75).unwrap();

        let measurements = load_measurements(&path).unwrap();
        assert_eq!(
            measurements,
            vec![Measurement::new(4.0, 1.5), Measurement::new(8.0, 0.75)]
        );
    }
}
