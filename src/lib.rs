//! Qubit Histogram
//!
//! Turns a batch of quantum-measurement shots into a complete, zero-filled
//! outcome histogram in the `Z`, `Z'` or `X` basis, and hands the aligned
//! labels and frequencies to a chart renderer.
//!
//! ```
//! use qubit_histogram::aggregator::{aggregate, MeasurementResult::*, Shot};
//!
//! let shots = vec![
//!     Shot::from([Zero, One]),
//!     Shot::from([Zero, One]),
//!     Shot::from([One, One]),
//! ];
//! let (labels, freqs) = aggregate(&shots, "Z", true).unwrap().into_parts();
//! assert_eq!(labels, vec!["|01⟩", "|11⟩"]);
//! assert_eq!(freqs, vec![2, 1]);
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
