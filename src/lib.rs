//! # invcdf-lab
//!
//! Inverse-CDF sampling experiments.
//!
//! Draws uniform samples, pushes them through closed-form inverse CDFs and
//! checks the result against the target distribution, numerically and as a
//! plotted figure.
//!
//! ## Modules
//!
//! - [`special`]: signed cube root
//! - [`transforms`]: inverse-CDF mappings and their target distributions
//! - [`random`]: uniform sampler, entropy-seeded or fixed-seed
//! - [`stats`]: moments, histogram, Kolmogorov–Smirnov distance
//! - [`grid`]: evenly spaced evaluation grids
//! - [`experiment`]: variants, configuration and the sampling pipeline
//! - [`render`]: PNG/SVG figure output
//!
//! ## Example
//!
//! ```
//! use invcdf_lab::experiment::{run, ExperimentConfig, Variant};
//! use invcdf_lab::transforms::Transform;
//!
//! let config = ExperimentConfig {
//!     variant: Variant::PowerLaw,
//!     samples: 20_000,
//!     seed: Some(1),
//!     ..ExperimentConfig::default()
//! };
//! let experiment = run(&config).unwrap();
//! let linear = experiment.row(Transform::Sqrt).unwrap();
//! assert!((linear.summary.mean - 2.0 / 3.0).abs() < 0.01);
//! ```

pub mod error;
pub mod experiment;
pub mod grid;
pub mod random;
pub mod render;
pub mod special;
pub mod stats;
pub mod transforms;

pub use error::{Error, Result};
