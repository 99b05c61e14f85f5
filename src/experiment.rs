//! One sampling experiment: draw, transform, summarise.
//!
//! A [`Variant`] names the set of transforms compared side by side. The two
//! variants are independent configurations and use different formulas for
//! the linear and quadratic rows; they are not meant to agree.

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::unit_grid;
use crate::random::UniformSampler;
use crate::stats::{ks_distance, Histogram, SampleSummary};
use crate::transforms::Transform;

/// Default number of uniform draws.
pub const DEFAULT_SAMPLES: usize = 100_000;
/// Default histogram bin count.
pub const DEFAULT_BINS: usize = 100;

/// A named set of transforms plotted against the uniform baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// `√u`, `∛u` and `u^(2/3)` over a 1000-point curve grid.
    #[default]
    PowerLaw,
    /// `√(4u)/2` and the shifted cube root over a 100-point curve grid.
    ShiftedCubic,
}

impl Variant {
    /// Rows of the figure, baseline first.
    pub fn transforms(&self) -> &'static [Transform] {
        match self {
            Variant::PowerLaw => &[
                Transform::Identity,
                Transform::Sqrt,
                Transform::CubeRoot,
                Transform::TwoThirdsPower,
            ],
            Variant::ShiftedCubic => &[
                Transform::Identity,
                Transform::ScaledSqrt,
                Transform::ShiftedCubeRoot,
            ],
        }
    }

    pub fn default_grid_points(&self) -> usize {
        match self {
            Variant::PowerLaw => 1000,
            Variant::ShiftedCubic => 100,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::PowerLaw => "power-law",
            Variant::ShiftedCubic => "shifted-cubic",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub variant: Variant,
    pub samples: usize,
    pub bins: usize,
    /// Curve grid resolution; `None` uses the variant's default.
    pub grid_points: Option<usize>,
    /// Fixed seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            samples: DEFAULT_SAMPLES,
            bins: DEFAULT_BINS,
            grid_points: None,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn grid_points(&self) -> usize {
        self.grid_points
            .unwrap_or_else(|| self.variant.default_grid_points())
    }

    /// # Errors
    /// Returns [`Error::InvalidConfig`] if there are no samples, no bins, or
    /// fewer than two grid points.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::InvalidConfig("sample count must be > 0".into()));
        }
        if self.bins == 0 {
            return Err(Error::InvalidConfig("bin count must be > 0".into()));
        }
        if self.grid_points() < 2 {
            return Err(Error::InvalidConfig(format!(
                "curve grid needs at least 2 points, got {}",
                self.grid_points()
            )));
        }
        Ok(())
    }
}

/// One row of the figure.
#[derive(Debug, Clone)]
pub struct Row {
    pub transform: Transform,
    /// Transformed samples in draw order.
    pub samples: Vec<f64>,
    pub histogram: Histogram,
    /// `(u, F⁻¹(u))` over the curve grid; `None` for the baseline.
    pub curve: Option<Vec<(f64, f64)>>,
    pub summary: SampleSummary,
}

impl Row {
    fn build(transform: Transform, uniform: &[f64], grid: &[f64], bins: usize) -> Result<Self> {
        let samples = transform.apply_all(uniform);
        let histogram = Histogram::new(&samples, bins).ok_or_else(|| {
            Error::InvalidConfig(format!("{transform}: no finite samples to histogram"))
        })?;
        let summary = SampleSummary::compute(&samples).ok_or_else(|| {
            Error::InvalidConfig(format!("{transform}: sample contains non-finite values"))
        })?;
        let curve = match transform {
            Transform::Identity => None,
            t => Some(grid.iter().map(|&u| (u, t.apply(u))).collect()),
        };
        Ok(Self {
            transform,
            samples,
            histogram,
            curve,
            summary,
        })
    }

    /// Sample mean minus the analytic mean of the target distribution.
    pub fn mean_error(&self) -> f64 {
        self.summary.mean - self.transform.mean()
    }

    /// KS distance between the sample and the target distribution.
    pub fn ks(&self) -> f64 {
        let t = self.transform;
        ks_distance(&self.samples, |x| t.cdf(x)).unwrap_or(f64::NAN)
    }
}

/// Result of a run: the curve grid and one row per transform.
#[derive(Debug, Clone)]
pub struct Experiment {
    pub variant: Variant,
    pub grid: Vec<f64>,
    pub rows: Vec<Row>,
}

impl Experiment {
    pub fn sample_count(&self) -> usize {
        self.rows.first().map_or(0, |r| r.samples.len())
    }

    pub fn row(&self, transform: Transform) -> Option<&Row> {
        self.rows.iter().find(|r| r.transform == transform)
    }
}

/// Runs the experiment with a sampler chosen by `config.seed`.
pub fn run(config: &ExperimentConfig) -> Result<Experiment> {
    match config.seed {
        Some(seed) => run_with_sampler(config, UniformSampler::seeded(seed)),
        None => run_with_sampler(config, UniformSampler::from_entropy()),
    }
}

/// Runs the experiment drawing from `sampler`.
///
/// Every row transforms the same uniform draw.
pub fn run_with_sampler<R: Rng>(
    config: &ExperimentConfig,
    mut sampler: UniformSampler<R>,
) -> Result<Experiment> {
    config.validate()?;
    debug!(
        "variant {}: drawing {} uniform samples",
        config.variant, config.samples
    );
    let uniform = sampler.sample(config.samples);
    let grid = unit_grid(config.grid_points());

    let rows = config
        .variant
        .transforms()
        .iter()
        .map(|&t| -> Result<Row> {
            let row = Row::build(t, &uniform, &grid, config.bins)?;
            debug!(
                "{t}: mean {:.5} (target {:.5}), range [{:.5}, {:.5}]",
                row.summary.mean,
                t.mean(),
                row.summary.min,
                row.summary.max
            );
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Experiment {
        variant: config.variant,
        grid,
        rows,
    })
}

// ============================================================================
// Tests
// ============================================================================
