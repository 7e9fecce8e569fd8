//! Error types for SLE Plot.

use crate::types::InputFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for SLE Plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Main error type for SLE Plot operations.
///
/// Every variant is fatal: the tools print the message and exit with
/// [`PlotError::exit_code`].
#[derive(Error, Debug)]
pub enum PlotError {
    /// An input file could not be opened or read.
    #[error("Cannot read '{}': {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A non-comment line did not match the expected input shape.
    #[error(
        "Bad input: '{}' must contain {}.\nComments must be preceded by a '#' symbol. (line {line})",
        .path.display(),
        .format.describe()
    )]
    Parse {
        /// File containing the offending line.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Shape the line was expected to have.
        format: InputFormat,
    },

    /// Too few samples to build a CDF.
    #[error("Not enough samples: '{}' contains {count}, at least 2 are required", .path.display())]
    InsufficientSamples {
        /// File the samples were read from.
        path: PathBuf,
        /// Number of samples found.
        count: usize,
    },

    /// The samples span more than an `f64` can represent.
    #[error("Sample range too wide: '{}' spans {min} to {max}", .path.display())]
    SampleRange {
        /// File the samples were read from.
        path: PathBuf,
        /// Smallest sample.
        min: f64,
        /// Largest sample.
        max: f64,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The chart could not be drawn or written.
    #[error("Graph error: {message}")]
    Render {
        /// Description of the problem.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PlotError {
    /// Create a new I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error.
    pub fn parse(path: impl Into<PathBuf>, line: usize, format: InputFormat) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            format,
        }
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new rendering error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new rendering error with source.
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Process exit code for this error. Always non-zero.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config { .. } => 3,
            _ => 1,
        }
    }
}

/// Convert from plotters drawing errors to `PlotError`.
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for PlotError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Graph rendering failed", err)
    }
}
