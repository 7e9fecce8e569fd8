//! # SLE Plot
//!
//! Command-line plotters for SLE simulation output.
//!
//! Two binaries share this library: `plot-cdf` draws the empirical CDF of a
//! single column of samples against a reference curve, and `plot-xy`
//! overlays the point series of one or more CSV files.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod cdf;
pub mod xy;

pub use args::*;

use sleplot_common::{init_logging, Result};
use sleplot_config::Config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Installs the global subscriber from the resolved configuration.
pub fn setup_logging(config: &Config) {
    if let Err(e) = init_logging(&config.logging) {
        // A subscriber is already installed (tests, embedding).
        debug!("logging already initialized: {e}");
    }
}

/// Reports the outcome of a run and maps it to the process exit code.
///
/// On success the output path goes to stdout; on failure the error message
/// goes to stderr.
#[must_use]
pub fn finish(result: Result<PathBuf>) -> ExitCode {
    match result {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
