//! Overlay of XY point series, one color per input file.

use crate::palette::series_color;
use crate::traits::GraphRenderer;
use crate::utils::{background_color, data_ranges, CHART_MARGIN, X_LABEL_AREA, Y_LABEL_AREA};
use plotters::prelude::*;
use sleplot_common::{PointSeries, Result};
use sleplot_config::ChartConfig;
use std::path::Path;
use tracing::{debug, info};

/// Line chart with one series per input file.
#[derive(Debug, Clone, Default)]
pub struct XyChart {
    series: Vec<PointSeries>,
}

impl XyChart {
    /// Creates a chart from parsed series, in command-line order.
    #[must_use]
    pub const fn new(series: Vec<PointSeries>) -> Self {
        Self { series }
    }

    /// The series to draw.
    #[must_use]
    pub fn series(&self) -> &[PointSeries] {
        &self.series
    }

    /// Color each series is drawn with, in order.
    #[must_use]
    pub fn colors(&self) -> Vec<RGBColor> {
        self.series.iter().map(|s| series_color(s.position)).collect()
    }
}

impl GraphRenderer for XyChart {
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        root.fill(&background_color(config))?;

        let (x_range, y_range) = data_ranges(
            self.series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| (p.x, p.y))),
        )?;

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
            mesh.x_desc("x").y_desc("y");
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;

        for series in &self.series {
            let style = series_color(series.position).stroke_width(2);
            debug!(
                source = %series.source.display(),
                position = series.position,
                points = series.len(),
                "drawing series"
            );
            let drawn = chart.draw_series(LineSeries::new(
                series.points.iter().map(|p| (p.x, p.y)),
                style,
            ))?;
            if config.labels {
                drawn
                    .label(series.label())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], style)
                    });
            }
        }

        if config.labels && self.series.len() > 1 {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;

        info!(
            graph = self.name(),
            path = %path.display(),
            series = self.series.len(),
            "rendered xy chart"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "xy"
    }

    fn description(&self) -> &'static str {
        "XY point series overlay"
    }
}
