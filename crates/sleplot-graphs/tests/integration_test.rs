//! Integration tests for sleplot-graphs crate.
//!
//! These tests read fixture files from disk, reduce them, and render charts
//! into a temporary directory.

use sleplot_common::test_utils::fixtures::{FixtureDir, PATH_POINTS, RATIO_SAMPLES};
use sleplot_common::test_utils::{assert_approx_eq, init_test_logging};
use sleplot_common::{PlotError, ReferenceCurve};
use sleplot_config::ChartConfig;
use sleplot_graphs::{
    compute, read_samples, read_series, sample_reference, series_color, CdfChart, GraphRenderer,
    XyChart,
};

fn quiet_chart() -> ChartConfig {
    ChartConfig {
        width: 320,
        height: 240,
        labels: false,
        ..ChartConfig::default()
    }
}

#[test]
fn test_cdf_pipeline_from_file() {
    init_test_logging();
    let dir = FixtureDir::new();
    let input = dir.write("ratio.csv", RATIO_SAMPLES);

    let samples = read_samples(&input).unwrap();
    assert_eq!(samples.len(), 6);

    let cdf = compute(&samples, 20, &input).unwrap();
    assert_eq!(cdf.edges.len(), 21);
    assert_approx_eq(cdf.edges[0], 0.05, 1e-12);
    assert_approx_eq(cdf.edges[20], 0.91, 1e-9);
    assert_eq!(cdf.fractions.last().copied(), Some(1.0));
    assert!(cdf.fractions.windows(2).all(|w| w[0] <= w[1]));

    let reference = sample_reference(&ReferenceCurve::default(), samples[4], 100);
    assert_eq!(reference.len(), 101);

    let output = dir.path("ratio.png");
    let chart = CdfChart::new(cdf, reference);
    chart.render_to_file(&quiet_chart(), &output).unwrap();
    assert!(std::fs::metadata(&output).unwrap().len() > 0);
}

#[test]
fn test_comments_do_not_change_cdf() {
    let dir = FixtureDir::new();
    let plain = dir.write("plain.csv", "0.3\n0.1\n0.7\n");
    let commented = dir.write("commented.csv", "# run 1\n0.3\n#0.5\n0.1\n# end\n0.7\n");

    let a = compute(&read_samples(&plain).unwrap(), 4, &plain).unwrap();
    let b = compute(&read_samples(&commented).unwrap(), 4, &commented).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_single_sample_file_is_rejected() {
    let dir = FixtureDir::new();
    let input = dir.write("one.csv", "# lonely\n0.4\n");
    let samples = read_samples(&input).unwrap();
    let err = compute(&samples, 20, &input).unwrap_err();
    assert!(matches!(err, PlotError::InsufficientSamples { count: 1, .. }));
}

#[test]
fn test_bad_sample_file_names_the_file() {
    let dir = FixtureDir::new();
    let input = dir.write("bad.csv", "0.1\n0.2\nhello\n");
    let err = read_samples(&input).unwrap_err();
    assert!(err.to_string().contains("bad.csv"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = FixtureDir::new();
    let err = read_samples(&dir.path("absent.csv")).unwrap_err();
    assert!(matches!(err, PlotError::Io { .. }));
}

#[test]
fn test_xy_pipeline_from_files() {
    init_test_logging();
    let dir = FixtureDir::new();
    let first = dir.write("path_a.csv", PATH_POINTS);
    let second = dir.write("path_b.csv", "# shifted\n1.0,0.0\n1.1,0.4\n0.8,0.9\n");

    let series = vec![
        read_series(&first, 1).unwrap(),
        read_series(&second, 2).unwrap(),
    ];
    assert_eq!(series[0].len(), 4);
    assert_eq!(series[1].len(), 3);

    let chart = XyChart::new(series);
    let colors = chart.colors();
    assert_eq!(colors, vec![series_color(1), series_color(2)]);
    assert_ne!(colors[0], colors[1]);

    let output = dir.path("paths.png");
    chart.render_to_file(&quiet_chart(), &output).unwrap();
    assert!(std::fs::metadata(&output).unwrap().len() > 0);
}

#[test]
fn test_bad_point_file_names_the_file() {
    let dir = FixtureDir::new();
    let input = dir.write("broken_path.csv", "0.0,0.0\n0.1;0.2\n");
    let err = read_series(&input, 1).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("broken_path.csv"));
    assert!(msg.contains("separated by commas"));
}

#[test]
fn test_renderer_names() {
    assert_eq!(XyChart::default().name(), "xy");
    assert!(!XyChart::default().description().is_empty());

    let cdf = compute(&[0.1, 0.9], 2, std::path::Path::new("two.csv")).unwrap();
    let chart = CdfChart::new(cdf, Vec::new());
    assert_eq!(chart.name(), "cdf");
    assert!(chart.description().contains("cumulative distribution"));
    assert_ne!(chart.name(), XyChart::default().name());
}

#[test]
fn test_wide_sample_file_is_rejected() {
    let dir = FixtureDir::new();
    let input = dir.write("wide.csv", "-1e308\n1e308\n");
    let samples = read_samples(&input).unwrap();
    let err = compute(&samples, 20, &input).unwrap_err();
    assert!(matches!(err, PlotError::SampleRange { .. }));
}

#[test]
fn test_non_utf8_line_is_parse_error() {
    let dir = FixtureDir::new();
    let input = dir.path("binary.csv");
    std::fs::write(&input, b"0.1\n\xff\xfe\n").unwrap();
    let err = read_samples(&input).unwrap_err();
    assert!(matches!(err, PlotError::Parse { line: 2, .. }));
    assert!(err.to_string().starts_with("Bad input: '"));
}
