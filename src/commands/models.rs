use crate::aggregator::{BucketTransform, EmptyBucketPolicy};
use crate::utils::config::{
    DEFAULT_GRID_INPUT, DEFAULT_GRID_OUTPUT, DEFAULT_MAX_CELLS, DEFAULT_PLOT_HEIGHT,
    DEFAULT_PLOT_WIDTH, DEFAULT_PROCESSOR_INPUT, DEFAULT_PROCESSOR_OUTPUT, DEFAULT_RESOLUTION,
    DEFAULT_THREAD_INPUT, DEFAULT_THREAD_OUTPUT, MAX_ITER,
};
use std::path::PathBuf;

/// Arguments for the processor and thread sweep commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TimingPlotArgs {
    /// Which key-to-bucket mapping to apply
    pub transform: BucketTransform,

    /// Two-column timing file
    pub input: PathBuf,

    /// Output path for the SVG scatter plot
    pub output_svg: PathBuf,

    /// Plot title override
    pub title: Option<String>,

    pub width: usize,
    pub height: usize,

    /// What to do with buckets that received no measurements
    pub empty_policy: EmptyBucketPolicy,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Optional JSON summary output
    pub output_json: Option<PathBuf>,
}

impl TimingPlotArgs {
    /// Defaults for a sweep kind: fixed input and output names
    pub fn for_transform(transform: BucketTransform) -> Self {
        let (input, output) = match transform {
            BucketTransform::Processors => (DEFAULT_PROCESSOR_INPUT, DEFAULT_PROCESSOR_OUTPUT),
            BucketTransform::Threads => (DEFAULT_THREAD_INPUT, DEFAULT_THREAD_OUTPUT),
        };

        Self {
            transform,
            input: PathBuf::from(input),
            output_svg: PathBuf::from(output),
            title: None,
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            empty_policy: EmptyBucketPolicy::Fail,
            print_summary: false,
            output_json: None,
        }
    }
}

impl Default for TimingPlotArgs {
    fn default() -> Self {
        Self::for_transform(BucketTransform::Threads)
    }
}

/// Arguments for the heat map command
#[derive(Debug, Clone)]
pub struct HeatmapArgs {
    /// Grid data file
    pub input: PathBuf,

    /// Output path for the SVG heat map
    pub output_svg: PathBuf,

    pub title: Option<String>,
    pub width: usize,
    pub height: usize,

    /// Cells per axis before block averaging
    pub max_cells: usize,
}

impl Default for HeatmapArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_GRID_INPUT),
            output_svg: PathBuf::from(DEFAULT_GRID_OUTPUT),
            title: None,
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Arguments for the grid generator
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Cells per axis
    pub resolution: usize,

    pub max_iter: u32,

    /// Worker pool size
    pub threads: usize,

    /// Grid data file to write (None = compute and time only)
    pub output_grid: Option<PathBuf>,

    /// Timing file to append `threads seconds` to
    pub record: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            max_iter: MAX_ITER,
            threads: 1,
            output_grid: Some(PathBuf::from(DEFAULT_GRID_INPUT)),
            record: None,
        }
    }
}
