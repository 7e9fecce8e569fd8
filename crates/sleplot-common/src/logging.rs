//! Structured logging infrastructure for SLE Plot.
//!
//! Both tools log to stderr so that nothing interferes with the chart output
//! path printed on stdout.

use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "warn", "info", "debug"). `RUST_LOG` wins when set.
    pub level: String,
    /// Whether to include the target module in each line.
    pub include_targets: bool,
    /// Whether to colorize output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            include_targets: false,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter: `RUST_LOG` if present and valid, else the configured
    /// level, else `warn`.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.ansi)
        .with_target(config.include_targets)
        .without_time();

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()?;

    Ok(())
}
