//! Theoretical reference curve sampling.

use sleplot_common::ReferenceCurve;

/// Domain the reference curve is drawn on: the unit interval containing the
/// minimum sample, `[floor(min), ceil(min)]`.
///
/// An integral minimum would give an empty interval, so `[min, min + 1]` is
/// used instead.
#[must_use]
pub fn reference_domain(min_sample: f64) -> (f64, f64) {
    let left = min_sample.floor();
    let right = min_sample.ceil();
    if right > left {
        (left, right)
    } else {
        (left, left + 1.0)
    }
}

/// Samples `curve` at `steps + 1` evenly spaced points across
/// [`reference_domain`]. Points where the formula is not finite are dropped.
///
/// Returns an empty vector for [`ReferenceCurve::Disabled`] or zero steps.
#[must_use]
pub fn sample_reference(curve: &ReferenceCurve, min_sample: f64, steps: usize) -> Vec<(f64, f64)> {
    if !curve.is_enabled() || steps == 0 {
        return Vec::new();
    }
    let (left, right) = reference_domain(min_sample);
    #[allow(clippy::cast_precision_loss)]
    let step = (right - left) / steps as f64;

    (0..=steps)
        .filter_map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = left + i as f64 * step;
            curve
                .evaluate(x)
                .filter(|y| y.is_finite())
                .map(|y| (x, y))
        })
        .collect()
}
