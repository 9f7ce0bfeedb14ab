//! Color-mapped image of an iteration-count grid.
//!
//! Grid row 0 is drawn at the bottom of the image and column 0 on the left.
//! The image panel is sized to keep the aspect ratio of the fixed axis
//! extents. Large grids are block-averaged first so the document stays a
//! manageable size.

use super::colormap::{ColorScale, Rgb};
use crate::parser::Grid;
use crate::utils::config::{
    DEFAULT_MAX_CELLS, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH, IMAG_BOUNDS, REAL_BOUNDS,
};
use crate::utils::error::RenderError;
use log::{debug, info};
use plotters::prelude::*;

const MARGIN: u32 = 20;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 70;
const COLORBAR_PANEL: u32 = 150;
const COLORBAR_LABEL_AREA: u32 = 90;
const COLORBAR_STEPS: usize = 64;

/// Heat map configuration
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colorbar_label: String,
    pub width: usize,
    pub height: usize,

    /// Data extents as (x_min, x_max, y_min, y_max)
    pub extent: (f64, f64, f64, f64),

    /// Cells per axis above which the grid is block-averaged
    pub max_cells: usize,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "Real axis".to_string(),
            y_label: "Imaginary axis".to_string(),
            colorbar_label: "Number of iterations to divergence".to_string(),
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            extent: (REAL_BOUNDS.0, REAL_BOUNDS.1, IMAG_BOUNDS.0, IMAG_BOUNDS.1),
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl HeatmapConfig {
    pub fn new() -> Self {
        Self::default()
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

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }
}

/// Grid reduced to at most `max_cells` per axis, values as block means
#[derive(Debug, Clone, PartialEq)]
pub struct CellField {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<f64>,
}

impl CellField {
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }
}

/// Block-average a grid down to at most `max_cells` cells per axis
///
/// A grid already within bounds is copied cell for cell.
pub fn downsample(grid: &Grid, max_cells: usize) -> CellField {
    let max_cells = max_cells.max(1);
    let row_factor = grid.rows().div_ceil(max_cells).max(1);
    let col_factor = grid.cols().div_ceil(max_cells).max(1);
    let rows = grid.rows().div_ceil(row_factor);
    let cols = grid.cols().div_ceil(col_factor);

    let mut values = Vec::with_capacity(rows * cols);
    for block_row in 0..rows {
        let r0 = block_row * row_factor;
        let r1 = (r0 + row_factor).min(grid.rows());
        for block_col in 0..cols {
            let c0 = block_col * col_factor;
            let c1 = (c0 + col_factor).min(grid.cols());

            let mut sum = 0.0;
            let mut count = 0usize;
            for r in r0..r1 {
                for c in c0..c1 {
                    if let Some(v) = grid.get(r, c) {
                        sum += v as f64;
                        count += 1;
                    }
                }
            }
            values.push(sum / count.max(1) as f64);
        }
    }

    if row_factor > 1 || col_factor > 1 {
        debug!(
            "Downsampled {}x{} grid to {}x{} cells",
            grid.rows(),
            grid.cols(),
            rows,
            cols
        );
    }

    CellField { rows, cols, values }
}

/// A horizontal run of same-colored cells, in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRun {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub color: Rgb,
}

/// Lay the cells out over the extent, merging horizontal runs of one color
///
/// Row 0 spans the lowest y band; column 0 the lowest x band.
pub fn cell_runs(
    field: &CellField,
    scale: &ColorScale,
    extent: (f64, f64, f64, f64),
) -> Vec<CellRun> {
    let (x_min, x_max, y_min, y_max) = extent;
    let dx = (x_max - x_min) / field.cols.max(1) as f64;
    let dy = (y_max - y_min) / field.rows.max(1) as f64;

    let mut runs = Vec::new();
    for row in 0..field.rows {
        let y0 = y_min + row as f64 * dy;

        let mut col = 0;
        while col < field.cols {
            let color = scale.color(field.get(row, col));
            let mut run = 1;
            while col + run < field.cols && scale.color(field.get(row, col + run)) == color {
                run += 1;
            }
            runs.push(CellRun {
                x0: x_min + col as f64 * dx,
                x1: x_min + (col + run) as f64 * dx,
                y0,
                y1: y0 + dy,
                color,
            });
            col += run;
        }
    }
    runs
}

/// Width of the image panel that gives the plotting area the extent's aspect
fn image_panel_width(config: &HeatmapConfig, panel: (u32, u32)) -> u32 {
    let (total_w, total_h) = panel;
    let max_w = total_w.saturating_sub(COLORBAR_PANEL).max(1);

    let (x_min, x_max, y_min, y_max) = config.extent;
    let data_w = (x_max - x_min).abs();
    let data_h = (y_max - y_min).abs();
    if data_w <= 0.0 || data_h <= 0.0 {
        return max_w;
    }

    let plot_h = total_h.saturating_sub(2 * MARGIN + X_LABEL_AREA) as f64;
    let plot_w = plot_h * data_w / data_h;
    let wanted = (plot_w + (2 * MARGIN + Y_LABEL_AREA) as f64).round() as u32;

    wanted.clamp(1, max_w)
}

/// Render a grid as an SVG heat map
///
/// **Public** - main entry point for grid images
///
/// The grid's minimum maps to white and its maximum to black.
///
/// # Errors
/// * `RenderError::EmptyGrid` - Grid has no cells
/// * `RenderError::DrawingArea` / `ChartConfig` / `Drawing` - plotters failures
pub fn render_heatmap(grid: &Grid, config: &HeatmapConfig) -> Result<String, RenderError> {
    let (min, max) = grid.value_range().ok_or(RenderError::EmptyGrid)?;
    let scale = ColorScale::new(min as f64, max as f64);

    info!(
        "Rendering {}x{} heat map (values {}..={})",
        grid.rows(),
        grid.cols(),
        min,
        max
    );

    let field = downsample(grid, config.max_cells);
    let runs = cell_runs(&field, &scale, config.extent);
    debug!("Heat map uses {} rectangles", runs.len());

    let (x_min, x_max, y_min, y_max) = config.extent;
    // plotters needs a non-empty range for the colorbar axis
    let bar_max = if max > min { max as f64 } else { min as f64 + 1.0 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width as u32, config.height as u32))
            .into_drawing_area();

        root.fill(&WHITE)
            .map_err(|e| RenderError::DrawingArea(e.to_string()))?;

        let root = if config.title.is_empty() {
            root
        } else {
            root.titled(&config.title, ("sans-serif", 24))
                .map_err(|e| RenderError::DrawingArea(e.to_string()))?
        };

        let split = image_panel_width(config, root.dim_in_pixel());
        let (image_panel, bar_panel) = root.split_horizontally(split);

        let mut chart = ChartBuilder::on(&image_panel)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        chart
            .draw_series(runs.iter().map(|run| {
                Rectangle::new(
                    [(run.x0, run.y0), (run.x1, run.y1)],
                    RGBColor::from(run.color).filled(),
                )
            }))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        let mut bar = ChartBuilder::on(&bar_panel)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .right_y_label_area_size(COLORBAR_LABEL_AREA)
            .build_cartesian_2d(0f64..1f64, min as f64..bar_max)
            .map_err(|e| RenderError::ChartConfig(e.to_string()))?;

        bar.configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_desc(config.colorbar_label.as_str())
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        let step = (bar_max - min as f64) / COLORBAR_STEPS as f64;
        bar.draw_series((0..COLORBAR_STEPS).map(|i| {
            let lo = min as f64 + i as f64 * step;
            let color = scale.color(lo + step / 2.0);
            Rectangle::new([(0.0, lo), (1.0, lo + step)], RGBColor::from(color).filled())
        }))
        .map_err(|e| RenderError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    info!("Heat map generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn increasing_3x3() -> Grid {
        Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_extremes_map_to_scale_ends() {
        let grid = increasing_3x3();
        let (min, max) = grid.value_range().unwrap();
        let scale = ColorScale::new(min as f64, max as f64);
        let runs = cell_runs(&downsample(&grid, 10), &scale, HeatmapConfig::default().extent);

        assert_eq!(runs.first().map(|r| r.color), Some(Rgb(255, 255, 255)));
        assert_eq!(runs.last().map(|r| r.color), Some(Rgb(0, 0, 0)));

        let svg = render_heatmap(&grid, &HeatmapConfig::default())
            .unwrap()
            .to_lowercase();
        assert!(svg.contains("#000000"));
        assert!(svg.contains("#ffffff"));
    }

    #[test]
    fn test_axis_labels_present() {
        let svg = render_heatmap(&increasing_3x3(), &HeatmapConfig::default()).unwrap();

        assert!(svg.contains("Number of iterations to divergence"));
        assert!(svg.contains("Real axis"));
        assert!(svg.contains("Imaginary axis"));
    }

    #[test]
    fn test_cell_colors_monotonic() {
        let grid = increasing_3x3();
        let (min, max) = grid.value_range().unwrap();
        let scale = ColorScale::new(min as f64, max as f64);

        let lums: Vec<f64> = (1..=9).map(|v| scale.color(v as f64).luminance()).collect();
        assert!(lums.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(scale.color(1.0), Rgb(255, 255, 255));
        assert_eq!(scale.color(9.0), Rgb(0, 0, 0));
    }

    #[test]
    fn test_row_zero_is_bottom_band() {
        // only the top-right cell is hot
        let grid = Grid::from_rows(vec![vec![0, 0], vec![0, 9]]).unwrap();
        let scale = ColorScale::new(0.0, 9.0);
        let runs = cell_runs(&downsample(&grid, 10), &scale, (-2.0, 0.5, -2.0, 2.0));

        let black: Vec<&CellRun> = runs.iter().filter(|r| r.color == Rgb(0, 0, 0)).collect();
        assert_eq!(black.len(), 1);
        assert_eq!((black[0].x0, black[0].x1), (-0.75, 0.5));
        assert_eq!((black[0].y0, black[0].y1), (0.0, 2.0));

        let bottom = runs.iter().find(|r| r.y0 == -2.0).unwrap();
        assert_eq!(bottom.color, Rgb(255, 255, 255));
        assert_eq!((bottom.x0, bottom.x1), (-2.0, 0.5));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::from_rows(vec![]).unwrap();
        let result = render_heatmap(&grid, &HeatmapConfig::default());
        assert!(matches!(result, Err(RenderError::EmptyGrid)));
    }

    #[test]
    fn test_flat_grid_renders() {
        let grid = Grid::from_rows(vec![vec![5, 5], vec![5, 5]]).unwrap();
        assert!(render_heatmap(&grid, &HeatmapConfig::default()).is_ok());
    }

    #[test]
    fn test_downsample_within_bounds_is_identity() {
        let field = downsample(&increasing_3x3(), 10);
        assert_eq!(field.rows, 3);
        assert_eq!(field.cols, 3);
        assert_eq!(field.get(2, 1), 8.0);
    }

    #[test]
    fn test_downsample_block_means() {
        let grid = Grid::from_rows(vec![
            vec![0, 2, 4, 6],
            vec![2, 4, 6, 8],
            vec![1, 1, 1, 1],
            vec![3, 3, 3, 3],
        ])
        .unwrap();
        let field = downsample(&grid, 2);

        assert_eq!((field.rows, field.cols), (2, 2));
        assert_eq!(field.values, vec![2.0, 6.0, 2.0, 2.0]);
    }

    #[test]
    fn test_downsample_uneven() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3, 4, 5]]).unwrap();
        let field = downsample(&grid, 2);

        assert_eq!(field.cols, 2);
        assert_eq!(field.values, vec![2.0, 4.5]);
    }

    #[test]
    fn test_image_panel_keeps_aspect() {
        let config = HeatmapConfig::default();
        let width = image_panel_width(&config, (800, 600));

        let plot_w = (width - 2 * MARGIN - Y_LABEL_AREA) as f64;
        let plot_h = (600 - 2 * MARGIN - X_LABEL_AREA) as f64;
        assert!((plot_w / plot_h - 2.5 / 4.0).abs() < 0.01);
        assert!(width <= 800 - COLORBAR_PANEL);
    }

    #[test]
    fn test_uniform_rows_merged() {
        let grid = Grid::from_rows(vec![vec![0, 0, 0, 0], vec![1, 1, 1, 1]]).unwrap();
        let runs = cell_runs(&downsample(&grid, 10), &ColorScale::new(0.0, 1.0), (0.0, 4.0, 0.0, 2.0));

        assert_eq!(runs.len(), 2);
    }
}
