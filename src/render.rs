//! Figure rendering.
//!
//! Lays an [`Experiment`] out as a grid of subplots, one row per transform:
//!
//! | column | content |
//! |---|---|
//! | 0 | scatter of sample value against draw index |
//! | 1 | histogram of the sample |
//! | 2 | transform curve over the unit grid (blank for the baseline) |
//!
//! The figure is written to disk; the file extension picks the backend.

use std::path::{Path, PathBuf};

use log::debug;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::experiment::{Experiment, Row};

const COLUMNS: usize = 3;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }
}

/// Where and how large to draw the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("invcdf.png"),
            width: 1500,
            height: 1600,
        }
    }
}

impl RenderConfig {
    /// # Errors
    /// - [`Error::UnsupportedOutput`] if the extension is not `.png` or `.svg`.
    /// - [`Error::InvalidConfig`] if either dimension is zero.
    pub fn validate(&self) -> Result<OutputFormat> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "figure size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        OutputFormat::from_path(&self.output)
            .ok_or_else(|| Error::UnsupportedOutput(self.output.clone()))
    }
}

/// Renders `experiment` to `config.output` and returns the written path.
pub fn render(experiment: &Experiment, config: &RenderConfig) -> Result<PathBuf> {
    let format = config.validate()?;
    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    let size = (config.width, config.height);
    debug!(
        "rendering {} rows as {:?} at {}x{}",
        experiment.rows.len(),
        format,
        size.0,
        size.1
    );

    let drawn = match format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(&config.output, size).into_drawing_area();
            draw_figure(&root, experiment).map_err(|e| e.to_string())
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(&config.output, size).into_drawing_area();
            draw_figure(&root, experiment).map_err(|e| e.to_string())
        }
    };
    drawn.map_err(Error::Render)?;

    debug!("wrote {}", config.output.display());
    Ok(config.output.clone())
}

pub type DrawResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Draws the full grid onto `root` and presents it.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    experiment: &Experiment,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    let rows = experiment.rows.len().max(1);
    let panels = root.split_evenly((rows, COLUMNS));

    for (i, row) in experiment.rows.iter().enumerate() {
        let color = if i == 0 { RED } else { BLUE };
        draw_scatter(&panels[i * COLUMNS], row, color)?;
        draw_histogram(&panels[i * COLUMNS + 1], row, color)?;
        if let Some(curve) = &row.curve {
            draw_curve(&panels[i * COLUMNS + 2], row, curve)?;
        }
    }

    root.present()?;
    Ok(())
}

/// Pads a degenerate or tight `[lo, hi]` so the axis has some extent.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span <= f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo - 0.02 * span, hi + 0.02 * span)
    }
}

fn draw_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    row: &Row,
    color: RGBColor,
) -> DrawResult<DB> {
    let n = row.samples.len() as f64;
    let (y_lo, y_hi) = padded(row.summary.min, row.summary.max);
    let mut chart = ChartBuilder::on(area)
        .caption(row.transform.name(), ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(44)
        .build_cartesian_2d(0.0..n.max(1.0), y_lo..y_hi)?;

    chart.configure_mesh().disable_mesh().draw()?;
    chart.draw_series(
        row.samples
            .iter()
            .enumerate()
            .map(|(i, &y)| Circle::new((i as f64, y), 1, color.filled())),
    )?;
    Ok(())
}

fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    row: &Row,
    color: RGBColor,
) -> DrawResult<DB> {
    let hist = &row.histogram;
    let (lo, hi) = hist.range();
    let y_hi = (hist.max_count() as f64 * 1.05).max(1.0);
    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(52)
        .build_cartesian_2d(lo..hi, 0.0..y_hi)?;

    chart.configure_mesh().disable_mesh().draw()?;
    let edges = hist.edges();
    chart.draw_series(hist.counts().iter().enumerate().map(|(k, &c)| {
        Rectangle::new(
            [(edges[k], 0.0), (edges[k + 1], c as f64)],
            color.mix(0.6).filled(),
        )
    }))?;
    Ok(())
}

fn draw_curve<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    row: &Row,
    curve: &[(f64, f64)],
) -> DrawResult<DB> {
    let (lo, hi) = row.transform.support();
    let (y_lo, y_hi) = padded(lo, hi);
    let mut chart = ChartBuilder::on(area)
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(44)
        .build_cartesian_2d(0.0..1.0, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("u")
        .y_desc("F⁻¹(u)")
        .draw()?;
    chart.draw_series(LineSeries::new(curve.iter().copied(), &BLUE))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
