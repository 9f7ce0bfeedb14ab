//! Grid generation command.
//!
//! Computes the divergence grid, optionally writes it for the heat map, and
//! optionally records the run time for the thread sweep.

use super::models::GenerateArgs;
use crate::mandelbrot::{compute_grid, GenerateReport, MandelbrotConfig};
use crate::output::{append_timing_record, write_grid};
use anyhow::{Context, Result};
use log::info;

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
pub fn execute_generate(args: GenerateArgs) -> Result<GenerateReport> {
    let config = MandelbrotConfig::default()
        .with_resolution(args.resolution)
        .with_max_iter(args.max_iter);

    let report = compute_grid(&config, args.threads).context("Failed to compute grid")?;
    let seconds = report.elapsed.as_secs_f64();

    println!("threads: {}   time in seconds: {:e}", report.threads, seconds);

    if let Some(path) = &args.output_grid {
        write_grid(&report.grid, config.max_iter, path).context("Failed to write grid file")?;
        info!("✓ Grid written to: {}", path.display());
    }

    if let Some(path) = &args.record {
        append_timing_record(path, report.threads, seconds)
            .context("Failed to record timing")?;
    }

    Ok(report)
}

/// Validate generate arguments
pub fn validate_generate_args(args: &GenerateArgs) -> Result<()> {
    if args.threads == 0 {
        anyhow::bail!("You set the number of threads to be 0, which is less than 1");
    }

    if args.resolution == 0 {
        anyhow::bail!("resolution must be greater than 0");
    }

    if args.max_iter == 0 {
        anyhow::bail!("max_iter must be greater than 0");
    }

    if args.output_grid.is_some() && args.output_grid == args.record {
        anyhow::bail!("Grid file and timing record cannot share a path");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{load_grid, load_measurements};

    #[test]
    fn test_validate_zero_threads() {
        let args = GenerateArgs {
            threads: 0,
            ..Default::default()
        };
        assert!(validate_generate_args(&args).is_err());
    }

    #[test]
    fn test_validate_defaults() {
        assert!(validate_generate_args(&GenerateArgs::default()).is_ok());
    }

    #[test]
    fn test_execute_generate_writes_grid_and_record() {
        let temp_dir = tempfile::tempdir().unwrap();
        let grid_path = temp_dir.path().join("output.dat");
        let record_path = temp_dir.path().join("omp.dat");

        let args = GenerateArgs {
            resolution: 8,
            max_iter: 20,
            threads: 2,
            output_grid: Some(grid_path.clone()),
            record: Some(record_path.clone()),
        };
        let report = execute_generate(args).unwrap();

        assert_eq!(load_grid(&grid_path).unwrap(), report.grid);

        let records = load_measurements(&record_path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, 2.0);
    }
}
