//! Plot command implementation.
//!
//! The plot command:
//! 1. Reads measurement results
//! 2. Aggregates them into a zero-filled histogram
//! 3. Renders the bar chart
//! 4. Writes output files

use super::models::PlotArgs;
use crate::aggregator::{aggregate_with, AggregateOptions, Basis, Histogram};
use crate::chart::{render_histogram, SvgBarChart, TextBarChart};
use crate::output::{to_report, write_report, write_svg};
use crate::parser::read_results;
use crate::utils::config::MAX_QUBITS;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::IsTerminal;
use std::time::Instant;

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed results file
/// * Unsupported basis, or shots of inconsistent shape
/// * File write errors
pub fn execute_plot(args: PlotArgs) -> Result<Histogram> {
    let start_time = Instant::now();

    info!("Plotting results from: {}", args.input.display());

    // Resolve the basis before touching the results
    let basis: Basis = args.basis.parse()?;

    // Step 1: Read results
    info!("Step 1/4: Reading measurement results...");
    let parsed = read_results(&args.input)
        .with_context(|| format!("Failed to read results from {}", args.input.display()))?;

    debug!(
        "Read {} shots (declared qubits: {:?})",
        parsed.shots.len(),
        parsed.qubits
    );

    // Step 2: Aggregate
    info!("Step 2/4: Aggregating outcomes in basis {}...", basis);
    let mut options = AggregateOptions::new(basis).with_hide_empty(args.hide_empty);
    options.qubits = args.qubits.or(parsed.qubits);

    let histogram =
        aggregate_with(&parsed.shots, &options).context("Failed to aggregate results")?;

    info!("Histogram: {}", histogram.summary());

    // Step 3: Render chart (if requested)
    let svg_content = if args.output_svg.is_some() {
        info!("Step 3/4: Rendering bar chart...");
        let renderer = SvgBarChart::new(args.chart_config.clone());
        let svg = render_histogram(&histogram, &renderer, &args.title)
            .context("Failed to render bar chart")?;
        Some(svg)
    } else {
        info!("Step 3/4: Skipping chart rendering (not requested)");
        None
    };

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");

    let report = to_report(&histogram, &args.title);
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if let (Some(svg), Some(svg_path)) = (svg_content, &args.output_svg) {
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;

        info!("✓ Chart written to: {}", svg_path.display());
    }

    if args.print_summary {
        let renderer = TextBarChart::default().with_color(std::io::stdout().is_terminal());
        let text = render_histogram(&histogram, &renderer, &args.title)
            .context("Failed to render text summary")?;
        println!("\n{}", "=".repeat(80));
        println!("{}", text);
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Plot completed in {:.2}s", elapsed.as_secs_f64());

    Ok(histogram)
}

/// Validate plot arguments
///
/// **Public** - can be called before execute_plot for early validation
pub fn validate_args(args: &PlotArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.title.trim().is_empty() {
        anyhow::bail!("A chart title is required");
    }

    args.basis.parse::<Basis>()?;

    if let Some(qubits) = args.qubits {
        if qubits == 0 {
            anyhow::bail!("qubits must be greater than 0");
        }

        if qubits > MAX_QUBITS {
            anyhow::bail!("qubits is too large (max {})", MAX_QUBITS);
        }
    }

    if args.chart_config.width == 0 || args.chart_config.height == 0 {
        anyhow::bail!("Chart width and height must be greater than 0");
    }

    Ok(())
}
