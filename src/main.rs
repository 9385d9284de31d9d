//! Qubit Histogram CLI
//!
//! Aggregates measurement results into outcome histograms and renders
//! them as SVG bar charts and JSON reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use qubit_histogram::commands::{
    display_schema, display_version, execute_plot, validate_args, validate_report_file, PlotArgs,
};
use qubit_histogram::utils::config::{load_config, PlotConfig};

/// Qubit Histogram - outcome charts for repeated quantum measurements
#[derive(Parser, Debug)]
#[command(name = "qhist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a results file and chart the outcome frequencies
    Plot {
        /// JSON file of measurement results
        #[arg(short, long)]
        input: PathBuf,

        /// Chart title
        #[arg(short, long)]
        title: Option<String>,

        /// Measurement basis: Z, Z' or X (case-insensitive)
        #[arg(short, long)]
        basis: Option<String>,

        /// Hide outcomes that never occurred
        #[arg(long)]
        hide_empty: bool,

        /// Keep outcomes that never occurred (overrides `hide_empty` in --config)
        #[arg(long, conflicts_with = "hide_empty")]
        show_empty: bool,

        /// Qubit count (needed to chart an empty multi-qubit batch)
        #[arg(short, long)]
        qubits: Option<usize>,

        /// Output path for JSON report (placed in artifacts/ by default)
        #[arg(short, long, default_value = "artifacts/report.json")]
        output: PathBuf,

        /// Output path for SVG chart (placed in artifacts/ by default)
        #[arg(short, long, default_missing_value = "artifacts/chart.svg", num_args = 0..=1)]
        chart: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long)]
        width: Option<usize>,

        /// Chart height in pixels
        #[arg(long)]
        height: Option<usize>,

        /// Bar fill, any SVG color
        #[arg(long)]
        bar_color: Option<String>,

        /// Print text chart to stdout
        #[arg(long)]
        summary: bool,

        /// TOML file with plot settings (flags take precedence)
        #[arg(long, env = "QHIST_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

/// `--hide-empty`/`--show-empty` as an override; `None` keeps the config value
fn hide_empty_flag(hide_empty: bool, show_empty: bool) -> Option<bool> {
    match (hide_empty, show_empty) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Plot {
            input,
            title,
            basis,
            hide_empty,
            show_empty,
            qubits,
            mut output,
            mut chart,
            width,
            height,
            bar_color,
            summary,
            config,
        } => {
            let file_config = match config {
                Some(path) => load_config(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => PlotConfig::default(),
            };

            // Ensure outputs go to artifacts/ if no directory is specified
            let artifacts_dir = PathBuf::from("artifacts");

            if output.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                output = artifacts_dir.join(output);
            }

            if let Some(ref mut svg) = chart {
                if svg.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                    *svg = artifacts_dir.join(&svg);
                }
            }

            // File settings first, then flags on top
            let mut args = PlotArgs::from_config(file_config);
            args.input = input;
            args.output_json = output;
            args.output_svg = chart;
            args.print_summary = summary;
            if let Some(hide) = hide_empty_flag(hide_empty, show_empty) {
                args.hide_empty = hide;
            }

            if let Some(title) = title {
                args.title = title;
            }
            if let Some(basis) = basis {
                args.basis = basis;
            }
            if qubits.is_some() {
                args.qubits = qubits;
            }
            let width = width.unwrap_or(args.chart_config.width);
            let height = height.unwrap_or(args.chart_config.height);
            args.chart_config = args.chart_config.with_size(width, height);
            if let Some(color) = bar_color {
                args.chart_config = args.chart_config.with_bar_color(color);
            }

            // Validate args first
            validate_args(&args)?;

            execute_plot(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn plot_flags(extra: &[&str]) -> (bool, bool) {
        let mut argv = vec!["qhist", "plot", "-i", "results.json"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Plot {
                hide_empty,
                show_empty,
                ..
            } => (hide_empty, show_empty),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_empty_overrides_config() {
        let mut args = PlotArgs::from_config(PlotConfig {
            hide_empty: Some(true),
            ..Default::default()
        });
        assert!(args.hide_empty);

        let (hide, show) = plot_flags(&["--show-empty"]);
        if let Some(value) = hide_empty_flag(hide, show) {
            args.hide_empty = value;
        }
        assert!(!args.hide_empty);
    }

    #[test]
    fn test_no_flag_keeps_config_value() {
        let (hide, show) = plot_flags(&[]);
        assert_eq!(hide_empty_flag(hide, show), None);

        let (hide, show) = plot_flags(&["--hide-empty"]);
        assert_eq!(hide_empty_flag(hide, show), Some(true));
    }

    #[test]
    fn test_hide_and_show_conflict() {
        let argv = ["qhist", "plot", "-i", "r.json", "--hide-empty", "--show-empty"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
