//! Terminal bar chart for `--summary` output.

use super::{check_aligned, ChartRenderer};
use crate::utils::error::ChartError;

const RESET: &str = "\x1b[0m";
const BAR_COLOR: &str = "\x1b[36m";
const EMPTY_COLOR: &str = "\x1b[90m";

/// Text renderer
#[derive(Debug, Clone)]
pub struct TextBarChart {
    /// Bar length, in characters, of the most frequent outcome
    pub bar_width: usize,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for TextBarChart {
    fn default() -> Self {
        Self {
            bar_width: 50,
            color: false,
        }
    }
}

impl TextBarChart {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}

impl ChartRenderer for TextBarChart {
    fn render(
        &self,
        labels: &[String],
        frequencies: &[u64],
        title: &str,
    ) -> Result<String, ChartError> {
        check_aligned(labels, frequencies)?;

        let mut lines = vec![format!("  {}", title)];

        if labels.is_empty() {
            lines.push("  (no outcomes to display)".to_string());
            return Ok(lines.join("\n"));
        }

        let total: u64 = frequencies.iter().sum();
        let max = frequencies.iter().copied().max().unwrap_or(0).max(1);
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let count_width = max.to_string().len();

        for (label, frequency) in labels.iter().zip(frequencies) {
            let length = (*frequency as f64 / max as f64 * self.bar_width as f64).round() as usize;
            let percentage = if total > 0 {
                *frequency as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            let bar = if *frequency == 0 {
                self.paint("·", EMPTY_COLOR)
            } else {
                self.paint(&"█".repeat(length.max(1)), BAR_COLOR)
            };
            let padding = " ".repeat(self.bar_width.saturating_sub(length.max(1)));

            lines.push(format!(
                "  {:<label_width$} {}{} {:>count_width$} {:>5.1}%",
                label,
                bar,
                padding,
                frequency,
                percentage,
                label_width = label_width,
                count_width = count_width,
            ));
        }

        lines.push(format!("  ({} shots)", total));
        Ok(lines.join("\n"))
    }
}
