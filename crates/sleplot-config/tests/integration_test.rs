//! Integration tests for sleplot-config crate.

use sleplot_common::test_utils::fixtures::FixtureDir;
use sleplot_common::ReferenceCurve;
use sleplot_config::{Config, ConfigLoader, DEFAULT_NUM_BIN};

#[test]
fn test_default_config_values() {
    let config = Config::default();
    assert_eq!(config.cdf.num_bin, DEFAULT_NUM_BIN);
    assert_eq!(
        config.cdf.reference,
        ReferenceCurve::HorizontalRatio { exponent: 0.625 }
    );
    assert_eq!(config.chart.background_rgb(), (255, 255, 255));
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_full_file() {
    let dir = FixtureDir::new();
    let path = dir.write(
        "sleplot.toml",
        r##"
[cdf]
num_bin = 40
reference_steps = 50
output = "ratio_cdf.png"

[cdf.reference]
kind = "disabled"

[xy]
output = "paths.png"

[chart]
width = 640
height = 480
title = "kappa = 6"
background = "#f0f0f0"
labels = false

[logging]
level = "debug"
"##,
    );

    let config = ConfigLoader::new(&path).load().unwrap();
    assert_eq!(config.cdf.num_bin, 40);
    assert_eq!(config.cdf.reference_steps, 50);
    assert_eq!(config.cdf.reference, ReferenceCurve::Disabled);
    assert_eq!(config.cdf.output.to_str(), Some("ratio_cdf.png"));
    assert_eq!(config.xy.output.to_str(), Some("paths.png"));
    assert_eq!(config.chart.title.as_deref(), Some("kappa = 6"));
    assert_eq!(config.chart.background_rgb(), (240, 240, 240));
    assert!(!config.chart.labels);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_round_trip_through_toml() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(ConfigLoader::parse(&text).unwrap(), config);
}

#[test]
fn test_invalid_file_names_path() {
    let dir = FixtureDir::new();
    let path = dir.write("broken.toml", "[chart]\nwidth = 0\n");
    let err = ConfigLoader::new(&path).load().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("broken.toml"));
    assert!(msg.contains("dimensions"));
}
