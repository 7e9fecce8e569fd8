//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use sleplot_common::{LoggingConfig, ReferenceCurve};
use std::path::PathBuf;

/// Main configuration structure for SLE Plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CDF plotter configuration.
    pub cdf: CdfConfig,
    /// XY plotter configuration.
    pub xy: XyConfig,
    /// Chart appearance shared by both tools.
    pub chart: ChartConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// CDF plotter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CdfConfig {
    /// Number of equal-width intervals the sample range is divided into.
    pub num_bin: usize,
    /// Number of steps the reference curve is sampled with.
    pub reference_steps: usize,
    /// Output image path.
    pub output: PathBuf,
    /// Theoretical curve drawn for comparison.
    pub reference: ReferenceCurve,
}

/// XY plotter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XyConfig {
    /// Output image path.
    pub output: PathBuf,
}

/// Chart appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Optional chart title.
    pub title: Option<String>,
    /// Title font size in points.
    pub title_font_size: u32,
    /// Background color in `#rrggbb` form.
    pub background: String,
    /// Whether to draw text (title, axis labels, legend).
    pub labels: bool,
}
