//! SVG bar chart generation.
//!
//! Hand-written SVG so the output is a single self-contained file:
//! - One bar per outcome, in the order given
//! - Frequency annotation on every bar
//! - Horizontal grid lines at "nice" tick intervals

use super::{check_aligned, ChartConfig, ChartRenderer};
use crate::utils::error::ChartError;
use log::info;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Fraction of each category slot filled by its bar
const BAR_FILL: f64 = 0.8;

/// Roughly how many grid lines to draw
const TARGET_TICKS: u64 = 5;

/// SVG renderer
#[derive(Debug, Clone, Default)]
pub struct SvgBarChart {
    config: ChartConfig,
}

impl SvgBarChart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for SvgBarChart {
    fn render(
        &self,
        labels: &[String],
        frequencies: &[u64],
        title: &str,
    ) -> Result<String, ChartError> {
        check_aligned(labels, frequencies)?;

        info!("Generating bar chart with {} bars", labels.len());

        let config = &self.config;
        let width = config.width as f64;
        let height = config.height as f64;
        let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let baseline = MARGIN_TOP + plot_height;

        let max_frequency = frequencies.iter().copied().max().unwrap_or(0);
        let step = tick_step(max_frequency, TARGET_TICKS);
        let axis_top = (max_frequency.div_ceil(step) * step).max(step);

        let mut svg_content = String::new();

        // Header
        svg_content.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            config.width, config.height, config.width, config.height
        ));
        svg_content.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            config.width, config.height
        ));

        // Title
        svg_content.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" font-family="sans-serif" text-anchor="middle">{}</text>"#,
            width / 2.0,
            MARGIN_TOP / 2.0 + config.title_font_size as f64 / 3.0,
            config.title_font_size,
            escape_xml(title)
        ));

        render_grid(&mut svg_content, config, step, axis_top, plot_width, plot_height);

        // Bars
        let slot = plot_width / labels.len().max(1) as f64;
        for (index, (label, frequency)) in labels.iter().zip(frequencies).enumerate() {
            let bar_height = *frequency as f64 / axis_top as f64 * plot_height;
            let slot_x = MARGIN_LEFT + index as f64 * slot;
            let bar_x = slot_x + slot * (1.0 - BAR_FILL) / 2.0;
            let bar_y = baseline - bar_height;
            let center = slot_x + slot / 2.0;
            let label = escape_xml(label);

            svg_content.push_str(&format!(
                r#"<g class="bar"><title>{}: {}</title><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                label,
                frequency,
                bar_x,
                bar_y,
                slot * BAR_FILL,
                bar_height,
                escape_xml(&config.bar_color)
            ));

            // Annotation: inside the bar if it fits, otherwise just above it
            let font = config.annotation_font_size as f64;
            let (text_y, fill) = if bar_height > font + 8.0 {
                (bar_y + font, "white")
            } else {
                (bar_y - 6.0, "black")
            };
            svg_content.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" font-family="sans-serif" text-anchor="middle" fill="{}">{}</text></g>"#,
                center, text_y, config.annotation_font_size, fill, frequency
            ));

            // Category label
            svg_content.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" font-family="sans-serif" text-anchor="middle">{}</text>"#,
                center,
                baseline + config.label_font_size as f64 + 6.0,
                config.label_font_size,
                label
            ));
        }

        // X axis line
        svg_content.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black"/>"#,
            MARGIN_LEFT,
            baseline,
            MARGIN_LEFT + plot_width,
            baseline
        ));

        svg_content.push_str("</svg>");

        info!("Bar chart generated successfully ({} bytes)", svg_content.len());
        Ok(svg_content)
    }
}

/// Horizontal grid lines and frequency tick labels
fn render_grid(
    out: &mut String,
    config: &ChartConfig,
    step: u64,
    axis_top: u64,
    plot_width: f64,
    plot_height: f64,
) {
    let baseline = MARGIN_TOP + plot_height;
    let mut tick = 0;
    while tick <= axis_top {
        let y = baseline - tick as f64 / axis_top as f64 * plot_height;
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="rgb(230, 230, 230)"/>"#,
            MARGIN_LEFT,
            y,
            MARGIN_LEFT + plot_width,
            y
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" font-family="sans-serif" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 8.0,
            y + config.tick_font_size as f64 / 3.0,
            config.tick_font_size,
            tick
        ));
        tick += step;
    }
}

/// Grid spacing: the smallest 1, 2 or 5 times a power of ten that splits
/// `max` into at most `target` intervals
pub fn tick_step(max: u64, target: u64) -> u64 {
    let raw = max.div_ceil(target.max(1)).max(1);
    let mut magnitude = 1u64;
    while magnitude.saturating_mul(10) <= raw {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10 * magnitude)
}

/// Escape text for inclusion in SVG markup
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
