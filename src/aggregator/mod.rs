//! Aggregation of measurement shots into outcome histograms.
//!
//! This module transforms a batch of shots into:
//! - Basis-specific outcome strings (`0`/`1`, `↑`/`↓`, `+`/`-`)
//! - A complete, zero-filled outcome domain in product order
//! - Aligned label and frequency sequences for charting

pub mod basis;
pub mod domain;
pub mod histogram;
pub mod shot;

// Re-export main types and functions
pub use basis::Basis;
pub use domain::{FrequencyTable, OutcomeDomain, MAX_DOMAIN_QUBITS};
pub use histogram::{aggregate, aggregate_with, ket_label, AggregateOptions, DisplayRow, Histogram};
pub use shot::{MeasurementResult, Shot, ShotShape};
