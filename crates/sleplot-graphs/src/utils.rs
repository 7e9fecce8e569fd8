//! Graph utility functions and helpers.

use plotters::style::RGBColor;
use sleplot_common::{PlotError, Result};
use sleplot_config::ChartConfig;
use std::ops::Range;

/// Fraction of each axis span added on both sides of the data.
const PADDING: f64 = 0.05;

/// Outer chart margin in pixels.
pub const CHART_MARGIN: u32 = 20;
/// Height of the x label area in pixels.
pub const X_LABEL_AREA: u32 = 40;
/// Width of the y label area in pixels.
pub const Y_LABEL_AREA: u32 = 50;

/// Computes padded `(x, y)` axis ranges covering every point.
///
/// Empty input yields the unit square; a zero-width span is widened so the
/// chart always has a non-empty range. Fails when a span overflows `f64`.
pub fn data_ranges<I>(points: I) -> Result<(Range<f64>, Range<f64>)>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for (x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_min > x_max {
        return Ok((0.0..1.0, 0.0..1.0));
    }

    Ok((padded(x_min, x_max)?, padded(y_min, y_max)?))
}

fn padded(min: f64, max: f64) -> Result<Range<f64>> {
    let span = max - min;
    if !span.is_finite() {
        return Err(PlotError::render(format!(
            "axis range {min} to {max} is too wide to draw"
        )));
    }
    if span > 0.0 {
        let pad = span * PADDING;
        if (span + 2.0 * pad).is_finite() {
            Ok((min - pad)..(max + pad))
        } else {
            Ok(min..max)
        }
    } else {
        let half = (min.abs() * PADDING).max(0.5);
        Ok((min - half)..(max + half))
    }
}

/// Background color of the configured chart.
#[must_use]
pub fn background_color(config: &ChartConfig) -> RGBColor {
    let (r, g, b) = config.background_rgb();
    RGBColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ranges() {
        let (x, y) = data_ranges(std::iter::empty()).unwrap();
        assert_eq!((x, y), (0.0..1.0, 0.0..1.0));
    }

    #[test]
    fn test_ranges_are_padded() {
        let (x, y) = data_ranges(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
        assert!(x.start < 1.0 && x.end > 3.0);
        assert!(y.start < 2.0 && y.end > 4.0);
    }

    #[test]
    fn test_single_point_is_widened() {
        let (x, y) = data_ranges(vec![(2.0, -1.0)]).unwrap();
        assert_eq!(x, 1.5..2.5);
        assert_eq!(y, -1.5..-0.5);
    }

    #[test]
    fn test_large_single_point_is_widened() {
        let (x, _) = data_ranges(vec![(1.0e308, 0.0)]).unwrap();
        assert!(x.start < x.end);
        assert!(x.start.is_finite() && x.end.is_finite());
    }

    #[test]
    fn test_near_max_span_stays_finite() {
        let (x, _) = data_ranges(vec![(0.0, 0.0), (1.7e308, 1.0)]).unwrap();
        assert_eq!(x, 0.0..1.7e308);
    }

    #[test]
    fn test_overflowing_span_is_render_error() {
        let err = data_ranges(vec![(-1.0e308, 0.0), (1.0e308, 1.0)]).unwrap_err();
        assert!(matches!(err, PlotError::Render { .. }));
    }

    #[test]
    fn test_background_color() {
        let mut config = ChartConfig::default();
        assert_eq!(background_color(&config), RGBColor(255, 255, 255));
        config.background = "#102030".to_string();
        assert_eq!(background_color(&config), RGBColor(16, 32, 48));
    }
}
