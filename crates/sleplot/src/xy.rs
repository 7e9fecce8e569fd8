//! The `plot-xy` command.

use sleplot_common::Result;
use sleplot_config::Config;
use sleplot_graphs::{read_series, GraphRenderer, XyChart};
use std::path::{Path, PathBuf};

/// Reads every file, then renders all series together. Returns the output path.
///
/// A parse failure in any file aborts before anything is drawn.
pub fn run(inputs: &[PathBuf], config: &Config) -> Result<PathBuf> {
    let chart = build_chart(inputs)?;
    let output = config.xy.output.clone();
    chart.render_to_file(&config.chart, &output)?;
    Ok(output)
}

/// Reads every file into a chart without drawing anything. Positions are
/// 1-based, in argument order.
pub fn build_chart<P: AsRef<Path>>(inputs: &[P]) -> Result<XyChart> {
    let series = inputs
        .iter()
        .enumerate()
        .map(|(index, path)| read_series(path.as_ref(), index + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(XyChart::new(series))
}
