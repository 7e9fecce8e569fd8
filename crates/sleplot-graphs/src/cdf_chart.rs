//! Empirical CDF chart with a reference curve overlay.

use crate::cdf::Cdf;
use crate::traits::GraphRenderer;
use crate::utils::{background_color, data_ranges, CHART_MARGIN, X_LABEL_AREA, Y_LABEL_AREA};
use plotters::prelude::*;
use sleplot_common::Result;
use sleplot_config::ChartConfig;
use std::path::Path;
use tracing::info;

/// Radius of the empirical CDF markers in pixels.
const MARKER_RADIUS: u32 = 3;

/// Empirical CDF drawn as red circles over a blue reference line.
#[derive(Debug, Clone)]
pub struct CdfChart {
    cdf: Cdf,
    reference: Vec<(f64, f64)>,
}

impl CdfChart {
    /// Creates a chart from a computed CDF and sampled reference points.
    ///
    /// `reference` may be empty, in which case only the empirical curve is drawn.
    #[must_use]
    pub const fn new(cdf: Cdf, reference: Vec<(f64, f64)>) -> Self {
        Self { cdf, reference }
    }

    /// The empirical CDF.
    #[must_use]
    pub const fn cdf(&self) -> &Cdf {
        &self.cdf
    }

    /// The sampled reference curve.
    #[must_use]
    pub fn reference(&self) -> &[(f64, f64)] {
        &self.reference
    }
}

impl GraphRenderer for CdfChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&background_color(config))?;

        let empirical = self.cdf.points();
        let (x_range, y_range) =
            data_ranges(empirical.iter().chain(self.reference.iter()).copied())?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(CHART_MARGIN);
        if config.labels {
            builder
                .x_label_area_size(X_LABEL_AREA)
                .y_label_area_size(Y_LABEL_AREA);
            if let Some(title) = &config.title {
                builder.caption(title, ("sans-serif", f64::from(config.title_font_size)));
            }
        }
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

        let mut mesh = chart.configure_mesh();
        if config.labels {
            mesh.x_desc("x").y_desc("P(X <= x)");
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;

        if !self.reference.is_empty() {
            let series = chart.draw_series(LineSeries::new(
                self.reference.iter().copied(),
                BLUE.stroke_width(2),
            ))?;
            if config.labels {
                series
                    .label("expected")
                    .legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2))
                    });
            }
        }

        let series = chart.draw_series(
            empirical
                .iter()
                .map(|&point| Circle::new(point, MARKER_RADIUS, RED.filled())),
        )?;
        if config.labels {
            series
                .label("empirical")
                .legend(|(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, RED.filled()));
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;

        info!(
            graph = self.name(),
            path = %path.display(),
            samples = self.cdf.sample_count,
            bins = self.cdf.edges.len().saturating_sub(1),
            "rendered cdf chart"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "cdf"
    }

    fn description(&self) -> &'static str {
        "Empirical cumulative distribution against a reference curve"
    }
}
