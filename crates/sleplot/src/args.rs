//! Command-line arguments for both tools.

use clap::{Args, Parser};
use sleplot_common::Result;
use sleplot_config::{Config, ConfigLoader};
use std::path::PathBuf;

/// Options shared by `plot-cdf` and `plot-xy`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output image path (the extension selects the format).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Chart title.
    #[arg(long)]
    pub title: Option<String>,

    /// Log level filter, e.g. `info` or `debug`. `RUST_LOG` takes precedence.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl CommonArgs {
    /// Loads the configuration file (or defaults) and applies the shared
    /// overrides. Validation runs after the caller's own overrides.
    fn base_config(&self) -> Result<Config> {
        let mut config = ConfigLoader::load_or_default(self.config.as_deref())?;
        if let Some(title) = &self.title {
            config.chart.title = Some(title.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        Ok(config)
    }
}

/// Plot the empirical CDF of a single column of samples.
///
/// Lines starting with '#' are comments.
#[derive(Debug, Clone, Parser)]
#[command(name = "plot-cdf", version, about)]
pub struct CdfArgs {
    /// Sample file, one value per line.
    #[arg(value_name = "FILENAME.csv")]
    pub file: PathBuf,

    /// Number of equal-width bins the sample range is divided into.
    #[arg(short, long, value_name = "N")]
    pub bins: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CdfArgs {
    /// Resolves the effective configuration: file, then flags, then validation.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = self.common.base_config()?;
        if let Some(bins) = self.bins {
            config.cdf.num_bin = bins;
        }
        if let Some(output) = &self.common.output {
            config.cdf.output.clone_from(output);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Plot XY point series from one or more CSV files.
///
/// Each line holds `x,y`; lines starting with '#' are comments.
#[derive(Debug, Clone, Parser)]
#[command(name = "plot-xy", version, about)]
pub struct XyArgs {
    /// Point files, one series per file.
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl XyArgs {
    /// Resolves the effective configuration: file, then flags, then validation.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = self.common.base_config()?;
        if let Some(output) = &self.common.output {
            config.xy.output.clone_from(output);
        }
        config.validate()?;
        Ok(config)
    }
}
