//! Sweep Plot CLI
//!
//! Averages processor and thread timing sweeps into scatter plots and renders
//! the Mandelbrot divergence grid as a heat map.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sweep_plot::aggregator::{BucketTransform, EmptyBucketPolicy};
use sweep_plot::commands::{
    execute_generate, execute_heatmap, execute_timing_plot, validate_generate_args,
    validate_heatmap_args, validate_timing_args, GenerateArgs, HeatmapArgs, TimingPlotArgs,
};
use sweep_plot::utils::config::{
    DEFAULT_GRID_INPUT, DEFAULT_MAX_CELLS, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH,
    DEFAULT_RESOLUTION, MAX_ITER, SCHEMA_VERSION,
};

/// Sweep Plot - timing sweep averaging and plotting
#[derive(Parser, Debug)]
#[command(name = "sweep-plot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by the processor and thread sweep plots
#[derive(Args, Debug)]
struct TimingOptions {
    /// Two-column timing file (defaults to dat.dat / omp.dat)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output path for the SVG plot (defaults to mpi.svg / omp.svg)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Plot title
    #[arg(long)]
    title: Option<String>,

    /// Plot width in pixels
    #[arg(long, default_value_t = DEFAULT_PLOT_WIDTH)]
    width: usize,

    /// Plot height in pixels
    #[arg(long, default_value_t = DEFAULT_PLOT_HEIGHT)]
    height: usize,

    /// Plot empty buckets as gaps instead of failing
    #[arg(long)]
    allow_empty: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Output path for a JSON summary (optional)
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Plot average run time against processor count
    Mpi(TimingOptions),

    /// Plot average run time against thread count
    Omp(TimingOptions),

    /// Render the divergence grid as a heat map
    Mandelbrot {
        /// Grid data file
        #[arg(short, long, default_value = DEFAULT_GRID_INPUT)]
        input: PathBuf,

        /// Output path for the SVG heat map
        #[arg(short, long, default_value = "mandelbrot.svg")]
        output: PathBuf,

        /// Plot title
        #[arg(long)]
        title: Option<String>,

        /// Plot width in pixels
        #[arg(long, default_value_t = DEFAULT_PLOT_WIDTH)]
        width: usize,

        /// Plot height in pixels
        #[arg(long, default_value_t = DEFAULT_PLOT_HEIGHT)]
        height: usize,

        /// Maximum cells per axis before block averaging
        #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
        max_cells: usize,
    },

    /// Compute the divergence grid and time it
    Generate {
        /// Number of worker threads
        #[arg(short, long, default_value = "1", env = "SWEEP_THREADS")]
        threads: usize,

        /// Cells per axis
        #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
        resolution: usize,

        /// Iteration cap
        #[arg(long, default_value_t = MAX_ITER)]
        max_iter: u32,

        /// Grid data file to write
        #[arg(short, long, default_value = DEFAULT_GRID_INPUT)]
        output: PathBuf,

        /// Skip writing the grid file
        #[arg(long)]
        no_grid: bool,

        /// Append `threads seconds` to this timing file
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Validate a JSON summary file
    Validate {
        /// Path to summary JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Mpi(options) => {
            run_timing_plot(BucketTransform::Processors, options)?;
        }

        Commands::Omp(options) => {
            run_timing_plot(BucketTransform::Threads, options)?;
        }

        Commands::Mandelbrot {
            input,
            output,
            title,
            width,
            height,
            max_cells,
        } => {
            let args = HeatmapArgs {
                input,
                output_svg: output,
                title,
                width,
                height,
                max_cells,
            };

            validate_heatmap_args(&args)?;
            execute_heatmap(args)?;
        }

        Commands::Generate {
            threads,
            resolution,
            max_iter,
            output,
            no_grid,
            record,
        } => {
            let args = GenerateArgs {
                resolution,
                max_iter,
                threads,
                output_grid: (!no_grid).then_some(output),
                record,
            };

            validate_generate_args(&args)?;
            execute_generate(args)?;
        }

        Commands::Validate { file } => {
            validate_summary_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Build sweep args from CLI options and run the plot
///
/// **Private** - shared by the `mpi` and `omp` subcommands
fn run_timing_plot(transform: BucketTransform, options: TimingOptions) -> Result<()> {
    let defaults = TimingPlotArgs::for_transform(transform);

    let args = TimingPlotArgs {
        transform,
        input: options.input.unwrap_or(defaults.input),
        output_svg: options.output.unwrap_or(defaults.output_svg),
        title: options.title,
        width: options.width,
        height: options.height,
        empty_policy: if options.allow_empty {
            EmptyBucketPolicy::Sentinel
        } else {
            EmptyBucketPolicy::Fail
        },
        print_summary: options.summary,
        output_json: options.json,
    };

    // Validate args first
    validate_timing_args(&args)?;

    execute_timing_plot(args)?;

    Ok(())
}

/// Validate a summary JSON file
///
/// **Private** - internal command implementation
fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    use sweep_plot::output::read_summary;

    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Version: {}", summary.version);
    println!("  Kind: {}", summary.kind);
    println!("  Source: {}", summary.source);
    println!("  Measurements: {}", summary.measurement_count);
    println!(
        "  Buckets: {} ({} empty)",
        summary.buckets.len(),
        summary.buckets.iter().filter(|b| b.average.is_none()).count()
    );

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Sweep Plot v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Averages parallel timing sweeps and renders them as SVG plots.");
}
