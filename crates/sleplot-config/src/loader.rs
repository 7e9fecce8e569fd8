//! Configuration loading from TOML files.

use crate::schema::Config;
use sleplot_common::{PlotError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader for a single TOML file.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the configuration file.
    pub fn load(&self) -> Result<Config> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            PlotError::config_with_source(
                format!("cannot read config file '{}'", self.path.display()),
                e,
            )
        })?;
        let config = Self::parse(&text).map_err(|e| match e {
            PlotError::Config { message, source } => PlotError::Config {
                message: format!("{}: {message}", self.path.display()),
                source,
            },
            other => other,
        })?;
        debug!(path = %self.path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn parse(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text)
            .map_err(|e| PlotError::config_with_source("invalid TOML", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
        path.map_or_else(|| Ok(Config::default()), |p| Self::new(p).load())
    }
}
