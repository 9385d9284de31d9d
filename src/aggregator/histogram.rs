//! Aggregate a batch of shots into a zero-filled, ordered histogram.
//!
//! Steps:
//! 1. Resolve the basis (before any other work)
//! 2. Resolve the batch shape from the first shot
//! 3. Classify every shot into an outcome string
//! 4. Tally outcomes and merge with the full outcome domain
//! 5. Optionally drop empty rows

use super::basis::Basis;
use super::domain::{FrequencyTable, OutcomeDomain};
use super::shot::{Shot, ShotShape};
use crate::utils::error::AggregateError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Options controlling aggregation
#[derive(Debug, Clone, Default)]
pub struct AggregateOptions {
    /// Basis the outcomes are written in
    pub basis: Basis,

    /// Drop rows whose frequency is zero
    pub hide_empty: bool,

    /// Explicit qubit count; required to get a multi-qubit domain from an
    /// empty batch, and checked against the batch otherwise
    pub qubits: Option<usize>,
}

impl AggregateOptions {
    pub fn new(basis: Basis) -> Self {
        Self {
            basis,
            ..Default::default()
        }
    }

    pub fn with_hide_empty(mut self, hide_empty: bool) -> Self {
        self.hide_empty = hide_empty;
        self
    }

    pub fn with_qubits(mut self, qubits: usize) -> Self {
        self.qubits = Some(qubits);
        self
    }
}

/// One bar of the histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Outcome wrapped in ket notation, e.g. `|01⟩`
    pub label: String,

    /// Raw outcome string, e.g. `01`
    pub outcome: String,

    /// Number of shots with this outcome
    pub frequency: u64,
}

impl DisplayRow {
    pub fn new(outcome: String, frequency: u64) -> Self {
        Self {
            label: ket_label(&outcome),
            outcome,
            frequency,
        }
    }
}

/// Wrap an outcome in `|…⟩`
pub fn ket_label(outcome: &str) -> String {
    format!("|{}⟩", outcome)
}

/// Aggregated outcome frequencies, ready for charting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    basis: Basis,
    qubits: usize,
    total_shots: usize,
    hide_empty: bool,
    rows: Vec<DisplayRow>,
}

impl Histogram {
    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    /// Number of shots in the batch
    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    pub fn hide_empty(&self) -> bool {
        self.hide_empty
    }

    /// Rows in outcome-domain order
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.label.clone()).collect()
    }

    pub fn frequencies(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.frequency).collect()
    }

    /// Split into the aligned `(labels, frequencies)` pair
    pub fn into_parts(self) -> (Vec<String>, Vec<u64>) {
        self.rows
            .into_iter()
            .map(|row| (row.label, row.frequency))
            .unzip()
    }

    /// Number of distinct outcomes that occurred at least once
    pub fn observed_outcomes(&self) -> usize {
        self.rows.iter().filter(|row| row.frequency > 0).count()
    }

    /// Most frequent row; the earliest in domain order wins ties
    pub fn most_frequent(&self) -> Option<&DisplayRow> {
        self.rows
            .iter()
            .filter(|row| row.frequency > 0)
            .fold(None, |best: Option<&DisplayRow>, row| match best {
                Some(b) if b.frequency >= row.frequency => Some(b),
                _ => Some(row),
            })
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let top = self
            .most_frequent()
            .map(|row| format!("{} ({})", row.label, row.frequency))
            .unwrap_or_else(|| "none".to_string());
        let domain_size = u32::try_from(self.qubits)
            .ok()
            .and_then(|q| 1u128.checked_shl(q))
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("2^{}", self.qubits));
        format!(
            "Basis: {} | Qubits: {} | Shots: {} | Observed: {}/{} | Top: {}",
            self.basis,
            self.qubits,
            self.total_shots,
            self.observed_outcomes(),
            domain_size,
            top
        )
    }
}

/// Aggregate `results` in the basis named by `basis`
///
/// **Public** - main entry point for aggregation
///
/// The basis token is matched case-insensitively against `Z`, `Z'` and
/// `X`; an unknown token is rejected before the results are looked at.
///
/// # Example
/// ```
/// use qubit_histogram::aggregator::{aggregate, MeasurementResult::*, Shot};
///
/// let shots = vec![Shot::from(Zero), Shot::from(Zero), Shot::from(One)];
/// let (labels, freqs) = aggregate(&shots, "Z", false).unwrap().into_parts();
/// assert_eq!(labels, vec!["|0⟩", "|1⟩"]);
/// assert_eq!(freqs, vec![2, 1]);
/// ```
pub fn aggregate(
    results: &[Shot],
    basis: &str,
    hide_empty: bool,
) -> Result<Histogram, AggregateError> {
    let basis: Basis = basis.parse()?;
    aggregate_with(
        results,
        &AggregateOptions::new(basis).with_hide_empty(hide_empty),
    )
}

/// Aggregate `results` with full options
///
/// # Errors
/// * `AggregateError::QubitCountMismatch` - explicit qubit count disagrees with the batch
/// * `AggregateError::InconsistentShot` - a shot's shape differs from the first shot
/// * `AggregateError::TooManyQubits` - the full domain would not fit in a `usize`
///   (only when `hide_empty` is off)
pub fn aggregate_with(
    results: &[Shot],
    options: &AggregateOptions,
) -> Result<Histogram, AggregateError> {
    let basis = options.basis;
    let shape = resolve_shape(results, options.qubits)?;
    let qubits = shape.qubits();

    debug!(
        "Aggregating {} shots of {} in basis {}",
        results.len(),
        shape,
        basis
    );

    let outcomes = results
        .iter()
        .enumerate()
        .map(|(index, shot)| {
            if shot.shape() != shape {
                return Err(AggregateError::InconsistentShot {
                    index,
                    expected: shape.to_string(),
                    found: shot.shape().to_string(),
                });
            }
            Ok(basis.classify(shot.results()))
        })
        .collect::<Result<Vec<String>, AggregateError>>()?;

    let table = FrequencyTable::tally(outcomes);

    // Hiding empty rows never needs the full 2^n domain
    let counts = if options.hide_empty {
        table.nonzero_in_order(basis)
    } else {
        table
            .zero_filled(OutcomeDomain::new(basis, qubits)?)
            .collect()
    };

    let rows: Vec<DisplayRow> = counts
        .into_iter()
        .map(|(outcome, count)| DisplayRow::new(outcome, count))
        .collect();

    debug!(
        "Built {} rows ({} distinct outcomes observed)",
        rows.len(),
        table.observed()
    );

    Ok(Histogram {
        basis,
        qubits,
        total_shots: results.len(),
        hide_empty: options.hide_empty,
        rows,
    })
}

/// Batch shape from the first shot, reconciled with an explicit qubit count
///
/// **Private** - internal helper for aggregate_with
fn resolve_shape(
    results: &[Shot],
    qubits: Option<usize>,
) -> Result<ShotShape, AggregateError> {
    match (results.first(), qubits) {
        (Some(first), Some(requested)) => {
            let shape = first.shape();
            if shape.qubits() != requested {
                return Err(AggregateError::QubitCountMismatch {
                    requested,
                    found: shape.qubits(),
                });
            }
            Ok(shape)
        }
        (Some(first), None) => Ok(first.shape()),
        (None, Some(requested)) => Ok(ShotShape::for_qubits(requested)),
        (None, None) => Ok(ShotShape::of_batch(results)),
    }
}
