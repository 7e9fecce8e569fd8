//! Runtime validation of configuration values.

use crate::defaults::{MAX_NUM_BIN, MAX_REFERENCE_STEPS};
use crate::schema::{CdfConfig, ChartConfig, Config};
use sleplot_common::{PlotError, ReferenceCurve, Result};

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.cdf.validate()?;
        self.chart.validate()
    }
}

impl CdfConfig {
    /// Validates the CDF section.
    pub fn validate(&self) -> Result<()> {
        if self.num_bin == 0 || self.num_bin > MAX_NUM_BIN {
            return Err(PlotError::config(format!(
                "cdf.num_bin must be between 1 and {MAX_NUM_BIN}, got {}",
                self.num_bin
            )));
        }
        if self.reference_steps == 0 || self.reference_steps > MAX_REFERENCE_STEPS {
            return Err(PlotError::config(format!(
                "cdf.reference_steps must be between 1 and {MAX_REFERENCE_STEPS}, got {}",
                self.reference_steps
            )));
        }
        if let ReferenceCurve::HorizontalRatio { exponent } = self.reference {
            if !exponent.is_finite() || exponent <= 0.0 {
                return Err(PlotError::config(format!(
                    "cdf.reference.exponent must be a positive number, got {exponent}"
                )));
            }
        }
        Ok(())
    }
}

impl ChartConfig {
    /// Validates the chart section.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlotError::config(format!(
                "chart dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.title_font_size == 0 {
            return Err(PlotError::config("chart.title_font_size must be at least 1"));
        }
        parse_hex_color(&self.background).ok_or_else(|| {
            PlotError::config(format!(
                "chart.background must be a #rrggbb color, got '{}'",
                self.background
            ))
        })?;
        Ok(())
    }

    /// Background color as RGB components.
    #[must_use]
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.background).unwrap_or((255, 255, 255))
    }
}

/// Parses a `#rrggbb` color string.
#[must_use]
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_bins_rejected() {
        let mut config = Config::default();
        config.cdf.num_bin = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bin_count_upper_bound() {
        let mut config = Config::default();
        config.cdf.num_bin = MAX_NUM_BIN;
        assert!(config.validate().is_ok());
        config.cdf.num_bin = MAX_NUM_BIN + 1;
        assert!(config.validate().is_err());
        config.cdf.num_bin = usize::MAX;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PlotError::Config { .. }));
        assert!(err.to_string().contains("cdf.num_bin"));
    }

    #[test]
    fn test_reference_steps_bounds() {
        let mut config = Config::default();
        config.cdf.reference_steps = 0;
        assert!(config.validate().is_err());
        config.cdf.reference_steps = MAX_REFERENCE_STEPS;
        assert!(config.validate().is_ok());
        config.cdf.reference_steps = MAX_REFERENCE_STEPS + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cdf.reference_steps"));
    }

    #[test]
    fn test_bad_exponent_rejected() {
        let mut config = Config::default();
        config.cdf.reference = ReferenceCurve::HorizontalRatio { exponent: -1.0 };
        assert!(config.validate().is_err());
        config.cdf.reference = ReferenceCurve::HorizontalRatio { exponent: f64::NAN };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let mut config = Config::default();
        config.chart.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_hex_color("#FF0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("#00ff7f"), Some((0, 255, 127)));
        assert_eq!(parse_hex_color("invalid"), None);
        assert_eq!(parse_hex_color("#ZZ0000"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }

    #[test]
    fn test_bad_background_rejected() {
        let mut config = Config::default();
        config.chart.background = "white".to_string();
        assert!(config.validate().is_err());
    }
}
