use crate::chart::ChartConfig;
use crate::utils::config::{PlotConfig, DEFAULT_BASIS};
use std::path::PathBuf;

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Results file to read
    pub input: PathBuf,

    /// Chart title (required, passed through unchanged)
    pub title: String,

    /// Basis token (`Z`, `Z'` or `X`, any case)
    pub basis: String,

    /// Drop outcomes that never occurred
    pub hide_empty: bool,

    /// Explicit qubit count (overrides the count declared in the file)
    pub qubits: Option<usize>,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Output path for SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart styling
    pub chart_config: ChartConfig,

    /// Print text chart to stdout
    pub print_summary: bool,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("results.json"),
            title: String::new(),
            basis: DEFAULT_BASIS.to_string(),
            hide_empty: false,
            qubits: None,
            output_json: PathBuf::from("report.json"),
            output_svg: None,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}

impl PlotArgs {
    /// Start from file settings; CLI flags are applied on top by the caller
    pub fn from_config(config: PlotConfig) -> Self {
        let defaults = Self::default();
        Self {
            title: config.title.unwrap_or(defaults.title),
            basis: config.basis.unwrap_or(defaults.basis),
            hide_empty: config.hide_empty.unwrap_or(defaults.hide_empty),
            qubits: config.qubits,
            chart_config: config.chart,
            ..defaults
        }
    }
}
