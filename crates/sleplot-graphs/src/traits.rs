//! Graph renderer trait shared by the chart types.

use sleplot_common::Result;
use sleplot_config::ChartConfig;
use std::path::Path;

/// Trait for charts that can be drawn to an image file.
pub trait GraphRenderer {
    /// Renders the chart to `path`. The image format follows the extension.
    fn render_to_file(&self, config: &ChartConfig, path: &Path) -> Result<()>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;
}
