//! Grid heat map command.

use super::models::HeatmapArgs;
use super::timing::validate_size;
use crate::output::write_svg;
use crate::parser::load_grid;
use crate::plot::{render_heatmap, HeatmapConfig};
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the heat map command
///
/// **Public** - main entry point called from main.rs
///
/// File rows hold the real axis and columns the imaginary axis; the grid is
/// transposed so the real axis runs horizontally and the imaginary axis
/// vertically, increasing upward.
pub fn execute_heatmap(args: HeatmapArgs) -> Result<()> {
    info!("Step 1/3: Loading grid from: {}", args.input.display());
    let grid = load_grid(&args.input)
        .with_context(|| format!("Failed to load grid file {}", args.input.display()))?;

    debug!("Grid value range: {:?}", grid.value_range());

    info!("Step 2/3: Rendering heat map...");
    let mut config = HeatmapConfig::new()
        .with_size(args.width, args.height)
        .with_max_cells(args.max_cells);
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }
    let svg = render_heatmap(&grid.transposed(), &config).context("Failed to render heat map")?;

    info!("Step 3/3: Writing output file...");
    write_svg(&svg, &args.output_svg).context("Failed to write heat map SVG")?;

    info!("✓ Heat map written to: {}", args.output_svg.display());

    Ok(())
}

/// Validate heat map arguments
pub fn validate_heatmap_args(args: &HeatmapArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input == args.output_svg {
        anyhow::bail!("Output path would overwrite the input file");
    }

    if args.max_cells == 0 {
        anyhow::bail!("max_cells must be greater than 0");
    }

    validate_size(args.width, args.height)
}
