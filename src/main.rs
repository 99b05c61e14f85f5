use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use invcdf_lab::experiment::{self, Experiment, ExperimentConfig, Variant};
use invcdf_lab::render::{self, RenderConfig};

/// Sample uniform numbers, push them through inverse CDFs and plot the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Set of transforms to compare against the uniform baseline.
    #[arg(long, value_enum, default_value_t = VariantArg::PowerLaw)]
    variant: VariantArg,

    /// Number of uniform draws.
    #[arg(short = 'n', long, default_value_t = experiment::DEFAULT_SAMPLES)]
    samples: usize,

    /// Histogram bin count.
    #[arg(long, default_value_t = experiment::DEFAULT_BINS)]
    bins: usize,

    /// Points on the transform curve grid. Defaults to 1000 for power-law
    /// and 100 for shifted-cubic.
    #[arg(long)]
    grid: Option<usize>,

    /// Fixed RNG seed. Without it every run draws a fresh sample.
    #[arg(long)]
    seed: Option<u64>,

    /// Output figure (.png or .svg).
    #[arg(short = 'o', long, value_name = "PATH", default_value = "invcdf.png")]
    output: PathBuf,

    /// Figure width in pixels.
    #[arg(long, default_value_t = 1500)]
    width: u32,

    /// Figure height in pixels.
    #[arg(long, default_value_t = 1600)]
    height: u32,

    /// Only print the summary, do not write a figure.
    #[arg(long, default_value_t = false)]
    no_plot: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    PowerLaw,
    ShiftedCubic,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::PowerLaw => Variant::PowerLaw,
            VariantArg::ShiftedCubic => Variant::ShiftedCubic,
        }
    }
}

fn print_summary(experiment: &Experiment) {
    println!(
        "{:<18} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "transform", "mean", "target", "sd", "ks", "min", "max"
    );
    for row in &experiment.rows {
        println!(
            "{:<18} {:>10.5} {:>10.5} {:>10.5} {:>10.5} {:>10.5} {:>10.5}",
            row.transform.name(),
            row.summary.mean,
            row.transform.mean(),
            row.summary.std_dev(),
            row.ks(),
            row.summary.min,
            row.summary.max
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = ExperimentConfig {
        variant: cli.variant.into(),
        samples: cli.samples,
        bins: cli.bins,
        grid_points: cli.grid,
        seed: cli.seed,
    };
    let render_config = RenderConfig {
        output: cli.output,
        width: cli.width,
        height: cli.height,
    };
    if !cli.no_plot {
        render_config
            .validate()
            .context("invalid figure options")?;
    }

    info!(
        "variant {}: {} samples, {} bins, {} grid points",
        config.variant,
        config.samples,
        config.bins,
        config.grid_points()
    );
    let experiment = experiment::run(&config).context("experiment failed")?;
    print_summary(&experiment);

    if !cli.no_plot {
        let path = render::render(&experiment, &render_config)
            .with_context(|| format!("failed to render {}", render_config.output.display()))?;
        info!("figure saved to {}", path.display());
    }
    Ok(())
}
