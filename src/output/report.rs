//! Report schema written to JSON.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{Basis, DisplayRow, Histogram};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Chart title
    pub title: String,

    /// Basis the outcomes are written in
    pub basis: Basis,

    /// Positions per outcome
    pub qubits: usize,

    /// Shots in the batch
    pub total_shots: usize,

    /// Whether zero-frequency rows were dropped
    pub hide_empty: bool,

    /// Rows in outcome-domain order
    pub rows: Vec<DisplayRow>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

impl HistogramReport {
    /// Sum of all row frequencies
    pub fn total_frequency(&self) -> u64 {
        self.rows.iter().map(|row| row.frequency).sum()
    }
}

/// Convert a histogram to the report format
///
/// **Public** - used by commands to create final output
pub fn to_report(histogram: &Histogram, title: &str) -> HistogramReport {
    HistogramReport {
        version: SCHEMA_VERSION.to_string(),
        title: title.to_string(),
        basis: histogram.basis(),
        qubits: histogram.qubits(),
        total_shots: histogram.total_shots(),
        hide_empty: histogram.hide_empty(),
        rows: histogram.rows().to_vec(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
