//! The `plot-cdf` command.

use sleplot_common::Result;
use sleplot_config::Config;
use sleplot_graphs::{compute, read_samples, sample_reference, CdfChart, GraphRenderer};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads `input`, computes its CDF, and renders it. Returns the output path.
pub fn run(input: &Path, config: &Config) -> Result<PathBuf> {
    let chart = build_chart(input, config)?;
    let output = config.cdf.output.clone();
    chart.render_to_file(&config.chart, &output)?;
    Ok(output)
}

/// Reads and reduces `input` without drawing anything.
pub fn build_chart(input: &Path, config: &Config) -> Result<CdfChart> {
    let samples = read_samples(input)?;
    let cdf = compute(&samples, config.cdf.num_bin, input)?;
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let reference = sample_reference(&config.cdf.reference, min, config.cdf.reference_steps);
    info!(
        input = %input.display(),
        samples = cdf.sample_count,
        reference_points = reference.len(),
        "prepared cdf"
    );
    Ok(CdfChart::new(cdf, reference))
}
