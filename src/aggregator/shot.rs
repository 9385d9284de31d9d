//! Measurement results and the shots that carry them.
//!
//! A shot is either one measured value (single qubit) or an ordered vector
//! of values, one per qubit. A batch is homogeneous: its shape comes from
//! the first shot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of measuring one qubit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementResult {
    Zero,
    One,
}

impl MeasurementResult {
    /// The only property the aggregator looks at
    pub fn is_zero(self) -> bool {
        self == Self::Zero
    }
}

impl From<bool> for MeasurementResult {
    fn from(bit: bool) -> Self {
        if bit {
            Self::One
        } else {
            Self::Zero
        }
    }
}

impl FromStr for MeasurementResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" | "0" => Ok(Self::Zero),
            "one" | "1" => Ok(Self::One),
            other => Err(format!("expected Zero or One, found '{}'", other)),
        }
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "Zero"),
            Self::One => write!(f, "One"),
        }
    }
}

/// A single repetition of the measurement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shot {
    /// One measured qubit
    Scalar(MeasurementResult),
    /// One result per qubit, position = qubit index
    Vector(Vec<MeasurementResult>),
}

impl Shot {
    pub fn shape(&self) -> ShotShape {
        match self {
            Self::Scalar(_) => ShotShape::Scalar,
            Self::Vector(results) => ShotShape::Vector(results.len()),
        }
    }

    /// Results in qubit order (a scalar shot is a one-element slice)
    pub fn results(&self) -> &[MeasurementResult] {
        match self {
            Self::Scalar(result) => std::slice::from_ref(result),
            Self::Vector(results) => results,
        }
    }
}

impl From<MeasurementResult> for Shot {
    fn from(result: MeasurementResult) -> Self {
        Self::Scalar(result)
    }
}

impl From<Vec<MeasurementResult>> for Shot {
    fn from(results: Vec<MeasurementResult>) -> Self {
        Self::Vector(results)
    }
}

impl<const N: usize> From<[MeasurementResult; N]> for Shot {
    fn from(results: [MeasurementResult; N]) -> Self {
        Self::Vector(results.to_vec())
    }
}

/// Shape shared by every shot of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotShape {
    Scalar,
    Vector(usize),
}

impl ShotShape {
    /// Shape of a batch, taken from its first shot
    ///
    /// An empty batch has no element to inspect and is treated as scalar.
    pub fn of_batch(results: &[Shot]) -> Self {
        results.first().map(Shot::shape).unwrap_or(Self::Scalar)
    }

    /// Shape for an explicit qubit count
    pub fn for_qubits(qubits: usize) -> Self {
        if qubits == 1 {
            Self::Scalar
        } else {
            Self::Vector(qubits)
        }
    }

    /// Number of positions in each outcome string
    pub fn qubits(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector(n) => n,
        }
    }
}

impl fmt::Display for ShotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "a single result"),
            Self::Vector(n) => write!(f, "a vector of {} results", n),
        }
    }
}
