//! Processor and thread sweep commands.
//!
//! Each run:
//! 1. Loads the two-column timing file
//! 2. Buckets and averages the measurements
//! 3. Renders the scatter plot
//! 4. Writes output files

use super::models::TimingPlotArgs;
use crate::aggregator::{sweep_overview, to_summary, BucketAverage, BucketedAverager};
use crate::output::{summary_to_string, validate_path, write_summary_string, write_svg};
use crate::parser::load_measurements;
use crate::plot::{generate_text_summary, render_scatter, scatter_points, ScatterConfig};
use crate::utils::config::{MAX_PLOT_SIZE, MIN_PLOT_SIZE};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute a timing sweep plot
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written unless every step before the write succeeds.
///
/// # Returns
/// The finalized bucket averages
///
/// # Errors
/// * Missing or malformed input file
/// * Key outside the bucket range
/// * Empty bucket under the fail policy
/// * File write errors
pub fn execute_timing_plot(args: TimingPlotArgs) -> Result<Vec<BucketAverage>> {
    let start_time = Instant::now();

    info!(
        "Starting {} sweep from: {}",
        args.transform,
        args.input.display()
    );

    // Step 1: Load measurements
    info!("Step 1/4: Loading measurements...");
    let measurements = load_measurements(&args.input)
        .with_context(|| format!("Failed to load timing file {}", args.input.display()))?;

    debug!("Loaded {} measurements", measurements.len());

    // Step 2: Aggregate
    info!("Step 2/4: Averaging by {} count...", args.transform);
    let mut averager = BucketedAverager::new(args.transform);
    averager
        .ingest(&measurements)
        .context("Failed to bucket measurements")?;

    info!("Counts per bucket: {:?}", averager.counts());

    let averages = averager
        .finalize(args.empty_policy)
        .context("Failed to average measurements")?;

    info!("Sweep: {}", sweep_overview(&averages).summary());

    // Step 3: Render
    info!("Step 3/4: Rendering scatter plot...");
    let mut config =
        ScatterConfig::for_transform(args.transform).with_size(args.width, args.height);
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }
    let svg = render_scatter(&scatter_points(&averages), &config)
        .context("Failed to render scatter plot")?;

    // Serialize the summary and check every output path before touching disk
    let summary_json = match &args.output_json {
        Some(json_path) => {
            validate_path(json_path).context("Invalid JSON summary path")?;
            let summary = to_summary(
                args.transform,
                &args.input.display().to_string(),
                &averages,
            );
            Some(summary_to_string(&summary).context("Failed to serialize summary")?)
        }
        None => None,
    };
    validate_path(&args.output_svg).context("Invalid plot path")?;

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");
    write_svg(&svg, &args.output_svg).context("Failed to write plot SVG")?;

    info!("✓ Plot written to: {}", args.output_svg.display());

    if let (Some(json_path), Some(json)) = (&args.output_json, &summary_json) {
        write_summary_string(json, json_path).context("Failed to write summary JSON")?;

        info!("✓ Summary written to: {}", json_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(48));
        println!("{} SWEEP SUMMARY", args.transform.name().to_uppercase());
        println!("{}", "=".repeat(48));
        println!("Input:        {}", args.input.display());
        println!("Measurements: {}", measurements.len());
        println!("\n{}", generate_text_summary(args.transform, &averages));
        println!("{}", "=".repeat(48));
    }

    let elapsed = start_time.elapsed();
    info!("Sweep plot completed in {:.2}s", elapsed.as_secs_f64());

    Ok(averages)
}

/// Validate timing plot arguments
///
/// **Public** - can be called before execute_timing_plot for early validation
pub fn validate_timing_args(args: &TimingPlotArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input == args.output_svg {
        anyhow::bail!("Output path would overwrite the input file");
    }

    if let Some(json_path) = &args.output_json {
        if json_path == &args.input {
            anyhow::bail!("JSON path would overwrite the input file");
        }
        if json_path == &args.output_svg {
            anyhow::bail!("JSON path and plot path cannot be the same");
        }
        validate_path(json_path).context("Invalid JSON summary path")?;
    }

    validate_size(args.width, args.height)
}

/// Check image dimensions against the supported range
pub(crate) fn validate_size(width: usize, height: usize) -> Result<()> {
    for (name, value) in [("width", width), ("height", height)] {
        if !(MIN_PLOT_SIZE..=MAX_PLOT_SIZE).contains(&value) {
            anyhow::bail!(
                "Plot {} must be between {} and {} pixels (got {})",
                name,
                MIN_PLOT_SIZE,
                MAX_PLOT_SIZE,
                value
            );
        }
    }
    Ok(())
}
