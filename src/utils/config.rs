//! Configuration and constants for the CLI.

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of buckets pre-allocated for every timing sweep
pub const BUCKET_COUNT: usize = 20;

// Default input files, read from the working directory
pub const DEFAULT_PROCESSOR_INPUT: &str = "dat.dat";
pub const DEFAULT_THREAD_INPUT: &str = "omp.dat";
pub const DEFAULT_GRID_INPUT: &str = "output.dat";

// Default output images
pub const DEFAULT_PROCESSOR_OUTPUT: &str = "mpi.svg";
pub const DEFAULT_THREAD_OUTPUT: &str = "omp.svg";
pub const DEFAULT_GRID_OUTPUT: &str = "mandelbrot.svg";

/// Character that starts a comment in numeric input files
pub const COMMENT_CHAR: char = '#';

// Plot geometry
pub const DEFAULT_PLOT_WIDTH: usize = 800;
pub const DEFAULT_PLOT_HEIGHT: usize = 600;
pub const MIN_PLOT_SIZE: usize = 200;
pub const MAX_PLOT_SIZE: usize = 10_000;

/// Upper bound on heat map cells per axis before block averaging kicks in
pub const DEFAULT_MAX_CELLS: usize = 500;

// Mandelbrot region: real axis on rows, imaginary axis on columns
pub const REAL_BOUNDS: (f64, f64) = (-2.0, 0.5);
pub const IMAG_BOUNDS: (f64, f64) = (-2.0, 2.0);
pub const DEFAULT_RESOLUTION: usize = 10_000;
pub const MAX_ITER: u32 = 1000;

/// |z|^2 threshold for divergence (2.0 squared)
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;
