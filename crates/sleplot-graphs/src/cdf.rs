//! Empirical CDF by cumulative binning.
//!
//! The sample range `[min, max]` is split into `num_bin` equal-width
//! intervals. A single forward sweep over the sorted samples counts, for each
//! upper edge, how many samples are `<=` that edge. Counts are normalized by
//! the sample total only after the sweep.

use sleplot_common::{PlotError, Result};
use sleplot_config::MAX_NUM_BIN;
use std::path::Path;
use tracing::{debug, warn};

/// Evenly spaced bin edges.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges {
    /// Edge values, starting at the minimum sample.
    pub values: Vec<f64>,
    /// Width of each interval.
    pub step: f64,
    /// Whether rounding produced a different number of edges than requested.
    pub irregular: bool,
}

/// Empirical cumulative distribution over bin edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf {
    /// Upper edges, `edges[0]` is the minimum sample.
    pub edges: Vec<f64>,
    /// Fraction of samples `<=` the matching edge.
    pub fractions: Vec<f64>,
    /// Number of samples the CDF was computed from.
    pub sample_count: usize,
}

impl Cdf {
    /// `(edge, fraction)` pairs, ready for plotting.
    #[must_use]
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.edges
            .iter()
            .copied()
            .zip(self.fractions.iter().copied())
            .collect()
    }
}

/// Generates edges `min + i * step` up to `max` with a half-step overshoot on
/// the stop value.
///
/// The expected count is `num_bin + 1`; floating point spacing can produce a
/// different count, which is logged as a warning and otherwise tolerated.
///
/// # Panics
///
/// Panics if `num_bin` is zero or if `max - min` is not finite.
#[must_use]
pub fn bin_edges(min: f64, max: f64, num_bin: usize) -> BinEdges {
    assert!(num_bin > 0, "num_bin must be at least 1");
    let span = max - min;
    assert!(span.is_finite(), "sample span must be finite");
    #[allow(clippy::cast_precision_loss)]
    let step = span / num_bin as f64;

    if step <= 0.0 {
        return BinEdges {
            values: vec![min; num_bin + 1],
            step: 0.0,
            irregular: false,
        };
    }

    let stop = max + 0.5 * step;
    let mut extent = (stop - min) / step;
    if !extent.is_finite() {
        // `stop` overflowed near the top of the f64 range.
        extent = span / step + 0.5;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = extent.ceil() as usize;
    #[allow(clippy::cast_precision_loss)]
    let values: Vec<f64> = (0..len).map(|i| min + i as f64 * step).collect();

    let irregular = values.len() != num_bin + 1;
    if irregular {
        warn!(
            expected = num_bin + 1,
            actual = values.len(),
            "floating point errors disrupting bins"
        );
    }

    BinEdges {
        values,
        step,
        irregular,
    }
}

/// Counts, for every edge, the samples `<=` that edge.
///
/// `sorted` must be in ascending order. Entry 0 is always 0 and the last
/// entry always equals `sorted.len()`.
#[must_use]
pub fn cumulative_counts(sorted: &[f64], edges: &[f64]) -> Vec<usize> {
    let mut counts = vec![0usize; edges.len()];
    if edges.len() < 2 {
        if let Some(only) = counts.first_mut() {
            *only = sorted.len();
        }
        return counts;
    }

    let last = edges.len() - 1;
    let mut cursor = 1;
    for &sample in sorted {
        if cursor == last {
            break;
        }
        if sample > edges[cursor] {
            while cursor < last && sample > edges[cursor] {
                cursor += 1;
                counts[cursor] = counts[cursor - 1];
            }
        }
        counts[cursor] += 1;
    }

    for i in cursor + 1..=last {
        counts[i] = counts[i - 1];
    }
    // The last edge can fall short of the maximum after rounding.
    counts[last] = sorted.len();
    counts
}

/// Computes the empirical CDF of `samples` over `num_bin` intervals.
///
/// `source` names the sample file in errors. Samples whose span overflows
/// `f64` are rejected with [`PlotError::SampleRange`].
pub fn compute(samples: &[f64], num_bin: usize, source: &Path) -> Result<Cdf> {
    if samples.len() < 2 {
        return Err(PlotError::InsufficientSamples {
            path: source.to_path_buf(),
            count: samples.len(),
        });
    }
    if num_bin == 0 || num_bin > MAX_NUM_BIN {
        return Err(PlotError::config(format!(
            "num_bin must be between 1 and {MAX_NUM_BIN}, got {num_bin}"
        )));
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    if !(max - min).is_finite() {
        return Err(PlotError::SampleRange {
            path: source.to_path_buf(),
            min,
            max,
        });
    }

    let edges = bin_edges(min, max, num_bin);
    let counts = cumulative_counts(&sorted, &edges.values);

    #[allow(clippy::cast_precision_loss)]
    let total = sorted.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let fractions = counts.iter().map(|&count| count as f64 / total).collect();

    debug!(
        samples = sorted.len(),
        min,
        max,
        step = edges.step,
        "computed cdf"
    );

    Ok(Cdf {
        edges: edges.values,
        fractions,
        sample_count: sorted.len(),
    })
}
