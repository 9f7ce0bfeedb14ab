//! Parallel divergence-count computation over a fixed complex region.
//!
//! Rows (real axis) are spread across a dedicated worker pool of the requested
//! size. Each worker owns the rows it computes; nothing is shared mutably.

use crate::parser::Grid;
use crate::utils::config::{
    DEFAULT_RESOLUTION, ESCAPE_RADIUS_SQ, IMAG_BOUNDS, MAX_ITER, REAL_BOUNDS,
};
use crate::utils::error::GenerateError;
use log::{debug, info};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Region, resolution and iteration limits for one grid
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotConfig {
    pub real_bounds: (f64, f64),
    pub imag_bounds: (f64, f64),

    /// Cells per axis
    pub resolution: usize,

    /// Iteration cap before a point counts as bounded
    pub max_iter: u32,

    /// |z|^2 threshold for divergence
    pub escape_radius_sq: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            real_bounds: REAL_BOUNDS,
            imag_bounds: IMAG_BOUNDS,
            resolution: DEFAULT_RESOLUTION,
            max_iter: MAX_ITER,
            escape_radius_sq: ESCAPE_RADIUS_SQ,
        }
    }
}

impl MandelbrotConfig {
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_max_iter(mut self, max_iter: u32) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Center of cell `index` along an axis
    fn position(&self, bounds: (f64, f64), index: usize) -> f64 {
        (bounds.1 - bounds.0) / self.resolution as f64 * (index as f64 + 0.5) + bounds.0
    }
}

/// Result of a timed grid computation
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub grid: Grid,
    pub threads: usize,
    pub elapsed: Duration,
}

/// Iterations before `z <- z^2 + c` escapes, starting from `z = 0`
///
/// Returns the 0-based iteration at which `|z|^2` first exceeds the
/// threshold, or `max_iter - 1` if it never does.
pub fn divergence_count(re: f64, im: f64, max_iter: u32, escape_radius_sq: f64) -> u32 {
    let (mut zr, mut zi) = (0.0f64, 0.0f64);

    for k in 0..max_iter {
        let next_r = zr * zr - zi * zi + re;
        zi = 2.0 * zr * zi + im;
        zr = next_r;

        if zr * zr + zi * zi > escape_radius_sq {
            return k;
        }
    }

    max_iter.saturating_sub(1)
}

/// Compute the divergence grid on a pool of `threads` workers
///
/// **Public** - main entry point for grid generation
///
/// Grid rows follow the real axis and columns the imaginary axis.
///
/// # Errors
/// * `GenerateError::InvalidConfig` - Zero threads, resolution or iterations
/// * `GenerateError::ThreadPool` - Worker pool could not be started
pub fn compute_grid(config: &MandelbrotConfig, threads: usize) -> Result<GenerateReport, GenerateError> {
    if threads == 0 {
        return Err(GenerateError::InvalidConfig(
            "thread count must be at least 1".to_string(),
        ));
    }
    if config.resolution == 0 || config.max_iter == 0 {
        return Err(GenerateError::InvalidConfig(
            "resolution and max_iter must be positive".to_string(),
        ));
    }

    let resolution = config.resolution;
    info!(
        "Computing {}x{} grid ({} max iterations) on {} threads",
        resolution, resolution, config.max_iter, threads
    );

    let start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

    let data: Vec<u32> = pool.install(|| {
        (0..resolution)
            .into_par_iter()
            .flat_map_iter(|i| {
                let re = config.position(config.real_bounds, i);
                (0..resolution).map(move |j| {
                    let im = config.position(config.imag_bounds, j);
                    divergence_count(re, im, config.max_iter, config.escape_radius_sq)
                })
            })
            .collect()
    });

    let elapsed = start.elapsed();
    debug!("Grid computed in {:.3}s", elapsed.as_secs_f64());

    let grid = Grid::new(resolution, resolution, data)
        .ok_or_else(|| GenerateError::InvalidConfig("grid size overflow".to_string()))?;

    Ok(GenerateReport {
        grid,
        threads,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_diverges() {
        assert_eq!(divergence_count(0.0, 0.0, 1000, 4.0), 999);
    }

    #[test]
    fn test_far_point_diverges_immediately() {
        // z1 = 3 + 0i, |z1|^2 = 9 > 4
        assert_eq!(divergence_count(3.0, 0.0, 1000, 4.0), 0);
    }

    #[test]
    fn test_point_one_diverges_after_two_steps() {
        // c = 1: z = 1, 2, 5 -> |5|^2 > 4 at k = 2
        assert_eq!(divergence_count(1.0, 0.0, 1000, 4.0), 2);
    }

    #[test]
    fn test_grid_shape_and_symmetry() {
        let config = MandelbrotConfig::default().with_resolution(16).with_max_iter(50);
        let report = compute_grid(&config, 2).unwrap();
        let grid = &report.grid;

        assert_eq!(grid.rows(), 16);
        assert_eq!(grid.cols(), 16);
        // imaginary bounds are symmetric, so columns mirror
        for i in 0..16 {
            for j in 0..8 {
                assert_eq!(grid.get(i, j), grid.get(i, 15 - j));
            }
        }
        assert_eq!(grid.value_range().map(|(_, max)| max), Some(49));
    }

    #[test]
    fn test_thread_count_does_not_change_result() {
        let config = MandelbrotConfig::default().with_resolution(12).with_max_iter(30);
        let single = compute_grid(&config, 1).unwrap();
        let multi = compute_grid(&config, 3).unwrap();
        assert_eq!(single.grid, multi.grid);
        assert_eq!(multi.threads, 3);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let config = MandelbrotConfig::default().with_resolution(4);
        assert!(matches!(
            compute_grid(&config, 0),
            Err(GenerateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_cell_centers() {
        let config = MandelbrotConfig::default().with_resolution(10);
        assert!((config.position(config.real_bounds, 0) - -1.875).abs() < 1e-12);
        assert!((config.position(config.imag_bounds, 9) - 1.8).abs() < 1e-12);
    }
}
