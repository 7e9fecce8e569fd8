//! Shared data types for samples and point series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A single `(x, y)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// All points read from one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeries {
    /// File the series was read from.
    pub source: PathBuf,
    /// 1-based position of the file on the command line.
    pub position: usize,
    /// Points in file order.
    pub points: Vec<Point>,
}

impl PointSeries {
    /// Creates an empty series for `source`.
    pub fn new(source: impl Into<PathBuf>, position: usize) -> Self {
        Self {
            source: source.into(),
            position,
            points: Vec::new(),
        }
    }

    /// Label used in chart legends: the file name without directories.
    #[must_use]
    pub fn label(&self) -> String {
        file_label(&self.source)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Shape an input line is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// One real number per line.
    Samples,
    /// Two comma-separated real numbers per line.
    Points,
}

impl InputFormat {
    /// Human-readable description used in parse errors.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Samples => "a single column of random variables",
            Self::Points => "columns of numbers separated by commas",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Closed-form CDF drawn for comparison with the empirical curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceCurve {
    /// `1 - (1 - x^2)^exponent`: expected CDF of the horizontal distance
    /// ratio for SLE curves (exponent 5/8 for the default simulation).
    HorizontalRatio {
        /// Outer exponent.
        #[serde(default = "default_exponent")]
        exponent: f64,
    },
    /// `x`, the CDF of the uniform distribution on `[0, 1]`.
    Uniform,
    /// No reference curve.
    Disabled,
}

const fn default_exponent() -> f64 {
    5.0 / 8.0
}

impl Default for ReferenceCurve {
    fn default() -> Self {
        Self::HorizontalRatio {
            exponent: default_exponent(),
        }
    }
}

impl ReferenceCurve {
    /// Evaluates the formula at `x`. Returns `None` for [`ReferenceCurve::Disabled`].
    ///
    /// The result may be `NaN` outside the formula's domain.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> Option<f64> {
        match *self {
            Self::HorizontalRatio { exponent } => Some(1.0 - (1.0 - x * x).powf(exponent)),
            Self::Uniform => Some(x),
            Self::Disabled => None,
        }
    }

    /// Whether a curve should be drawn at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
