//! Default values for every configuration section.

use crate::schema::{CdfConfig, ChartConfig, Config, XyConfig};
use sleplot_common::{LoggingConfig, ReferenceCurve};
use std::path::PathBuf;

/// Default number of CDF bins.
pub const DEFAULT_NUM_BIN: usize = 20;

/// Default number of steps the reference curve is sampled with.
pub const DEFAULT_REFERENCE_STEPS: usize = 100;

/// Largest accepted number of CDF bins.
pub const MAX_NUM_BIN: usize = 100_000;

/// Largest accepted number of reference curve steps.
pub const MAX_REFERENCE_STEPS: usize = 100_000;

impl Default for Config {
    fn default() -> Self {
        Self {
            cdf: CdfConfig::default(),
            xy: XyConfig::default(),
            chart: ChartConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CdfConfig {
    fn default() -> Self {
        Self {
            num_bin: DEFAULT_NUM_BIN,
            reference_steps: DEFAULT_REFERENCE_STEPS,
            output: PathBuf::from("cdf.png"),
            reference: ReferenceCurve::default(),
        }
    }
}

impl Default for XyConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("xy.png"),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
            title_font_size: 16,
            background: "#ffffff".to_string(),
            labels: true,
        }
    }
}
