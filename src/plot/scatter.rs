//! Scatter plot of per-bucket average times.

use crate::aggregator::{BucketAverage, BucketTransform};
use crate::utils::config::{BUCKET_COUNT, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};
use crate::utils::error::RenderError;
use log::{debug, info};
use plotters::prelude::*;

const MARGIN: u32 = 20;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 80;
const POINT_RADIUS: u32 = 4;
const POINT_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Headroom above the tallest point
const Y_PADDING: f64 = 1.05;

/// Scatter plot configuration
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: usize,
    pub height: usize,

    /// Fixed x-axis limits
    pub x_range: (f64, f64),
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self::for_transform(BucketTransform::Threads)
    }
}

impl ScatterConfig {
    /// Titles, labels and x limits matching the sweep kind
    ///
    /// The x axis runs from 0 to one past the largest bucket label.
    pub fn for_transform(transform: BucketTransform) -> Self {
        let (title, x_label) = match transform {
            BucketTransform::Processors => ("MPI runs", "Number of processors"),
            BucketTransform::Threads => ("OpenMP runs", "Number of threads"),
        };
        let x_max = transform.label(BUCKET_COUNT - 1) as f64 + 1.0;

        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: "Time (seconds)".to_string(),
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            x_range: (0.0, x_max),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// (label, average) pairs for every bucket with a finite average
pub fn scatter_points(averages: &[BucketAverage]) -> Vec<(f64, f64)> {
    averages
        .iter()
        .filter(|a| a.average.is_finite())
        .map(|a| (a.label as f64, a.average))
        .collect()
}

/// Points that fall inside the plotted window
///
/// The y axis starts at zero, so negative times are cropped, as are
/// non-finite values and x positions outside the configured range.
pub fn visible_points(points: &[(f64, f64)], x_range: (f64, f64)) -> Vec<(f64, f64)> {
    let (x_min, x_max) = x_range;
    points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .filter(|&(x, y)| y >= 0.0 && x >= x_min && x <= x_max)
        .collect()
}

/// Render a scatter plot as an SVG document
///
/// **Public** - main entry point for timing plots
///
/// # Errors
/// * `RenderError::EmptySeries` - No point inside the plotted window
/// * `RenderError::DrawingArea` / `ChartConfig` / `Drawing` - plotters failures
pub fn render_scatter(points: &[(f64, f64)], config: &ScatterConfig) -> Result<String, RenderError> {
    let visible = visible_points(points, config.x_range);

    if visible.len() < points.len() {
        debug!(
            "Cropped {} of {} points outside the plot window",
            points.len() - visible.len(),
            points.len()
        );
    }
    if visible.is_empty() {
        return Err(RenderError::EmptySeries);
    }

    info!("Rendering scatter plot with {} points", visible.len());

    let y_max = visible.iter().map(|(_, y)| *y).fold(0.0, f64::max) * Y_PADDING;
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };
    let (x_min, x_max) = config.x_range;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width as u32, config.height as u32))
            .into_drawing_area();

        root.fill(&WHITE)
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA);
        if !config.title.is_empty() {
            builder.caption(&config.title, ("sans-serif", 24));
        }

        let mut chart = builder
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .x_label_formatter(&|x| format!("{:.0}", x))
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        chart
            .draw_series(
                visible
                    .iter()
                    .map(|&point| Circle::new(point, POINT_RADIUS, POINT_COLOR.filled())),
            )
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    info!("Scatter plot generated successfully ({} bytes)", svg.len());
    Ok(svg)
}
