//! Bar chart rendering for outcome histograms.
//!
//! The aggregator hands two aligned sequences (labels, frequencies) and a
//! title to a [`ChartRenderer`]. Two renderers ship with the crate:
//! - [`SvgBarChart`] - standalone SVG document
//! - [`TextBarChart`] - terminal bars for `--summary`

pub mod svg;
pub mod text;

pub use svg::SvgBarChart;
pub use text::TextBarChart;

use crate::aggregator::Histogram;
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::error::ChartError;
use serde::{Deserialize, Serialize};

/// Consumer of aggregated histogram data
pub trait ChartRenderer {
    /// Render one bar per label, in order, with bar heights and on-bar
    /// annotations taken from `frequencies`
    fn render(&self, labels: &[String], frequencies: &[u64], title: &str)
        -> Result<String, ChartError>;
}

/// Chart styling
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    pub title_font_size: usize,
    /// Category (outcome) axis font size
    pub label_font_size: usize,
    /// Frequency axis font size
    pub tick_font_size: usize,
    /// On-bar frequency font size
    pub annotation_font_size: usize,
    /// Any SVG color
    pub bar_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            title_font_size: 24,
            label_font_size: 24,
            tick_font_size: 20,
            annotation_font_size: 30,
            bar_color: "rgb(99, 110, 250)".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bar_color(mut self, color: impl Into<String>) -> Self {
        self.bar_color = color.into();
        self
    }
}

/// Hand a histogram to a renderer
///
/// **Public** - glue between the aggregator and any renderer
pub fn render_histogram(
    histogram: &Histogram,
    renderer: &dyn ChartRenderer,
    title: &str,
) -> Result<String, ChartError> {
    renderer.render(&histogram.labels(), &histogram.frequencies(), title)
}

/// Reject label/frequency sequences of different lengths
fn check_aligned(labels: &[String], frequencies: &[u64]) -> Result<(), ChartError> {
    if labels.len() != frequencies.len() {
        return Err(ChartError::LengthMismatch {
            labels: labels.len(),
            frequencies: frequencies.len(),
        });
    }
    Ok(())
}
