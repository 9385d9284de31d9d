use crate::aggregator::ket_label;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
///
/// Checks that the rows are consistent with the header: frequencies sum to
/// the shot count, labels match their outcomes, and the row count fits the
/// outcome domain.
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    let total = report.total_frequency();
    if total != report.total_shots as u64 {
        anyhow::bail!(
            "Frequencies sum to {} but the report declares {} shots",
            total,
            report.total_shots
        );
    }

    let domain_size = 1u128 << report.qubits.min(64);
    if report.rows.len() as u128 > domain_size {
        anyhow::bail!(
            "{} rows exceed the {}-outcome domain of {} qubits",
            report.rows.len(),
            domain_size,
            report.qubits
        );
    }

    if let Some(row) = report.rows.iter().find(|r| r.label != ket_label(&r.outcome)) {
        anyhow::bail!(
            "Row label {} does not match outcome {}",
            row.label,
            row.outcome
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Title: {}", report.title);
    println!("  Basis: {}", report.basis);
    println!("  Qubits: {}", report.qubits);
    println!("  Shots: {}", report.total_shots);
    println!("  Rows: {}", report.rows.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Qubit Histogram Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string       - Schema version (e.g., '1.0.0')");
        println!("  title: string         - Chart title");
        println!("  basis: string         - Measurement basis (Z, Z' or X)");
        println!("  qubits: number        - Positions per outcome");
        println!("  total_shots: number   - Shots in the batch");
        println!("  hide_empty: boolean   - Whether zero rows were dropped");
        println!("  rows: array           - Outcomes in product order");
        println!("    label: string       - Ket label, e.g. |01⟩");
        println!("    outcome: string     - Outcome symbols, e.g. 01");
        println!("    frequency: number   - Shots with this outcome");
        println!("  generated_at: string  - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Qubit Histogram v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Outcome histograms for repeated quantum measurements.");
}
