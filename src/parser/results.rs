//! Parser for measurement result files.
//!
//! Accepts either a bare JSON array of shots or an object holding the shot
//! array under one of several field names:
//!
//! ```json
//! ["Zero", "One", "One"]
//! {"qubits": 2, "results": [["Zero", "One"], [1, 1]]}
//! ```

use crate::aggregator::{MeasurementResult, Shot};
use crate::utils::config::{QUBIT_FIELD_NAMES, RESULT_FIELD_NAMES};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parsed results file (internal representation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResults {
    /// Shots in file order
    pub shots: Vec<Shot>,

    /// Qubit count declared by the file, if any
    pub qubits: Option<usize>,
}

/// Read and parse a results file
///
/// **Public** - entry point used by the plot command
pub fn read_results(path: impl AsRef<Path>) -> Result<ParsedResults, ParseError> {
    let path = path.as_ref();
    debug!("Reading results from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&contents)?;
    parse_results(&raw)
}

/// Parse raw results JSON
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::InvalidFormat` - No shot array found
/// * `ParseError::InvalidResult` - A shot holds something other than Zero/One
pub fn parse_results(raw: &Value) -> Result<ParsedResults, ParseError> {
    let (shots_array, qubits) = detect_results_format(raw)?;

    let shots = shots_array
        .iter()
        .enumerate()
        .map(|(index, value)| parse_shot(index, value))
        .collect::<Result<Vec<Shot>, ParseError>>()?;

    debug!("Parsed {} shots", shots.len());

    Ok(ParsedResults { shots, qubits })
}

/// Locate the shot array and optional qubit count
///
/// **Private** - internal helper for parse_results
fn detect_results_format(raw: &Value) -> Result<(&Vec<Value>, Option<usize>), ParseError> {
    match raw {
        Value::Array(shots) => Ok((shots, None)),

        Value::Object(obj) => {
            let shots = RESULT_FIELD_NAMES
                .iter()
                .find_map(|field| obj.get(*field).and_then(Value::as_array))
                .ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "Expected a shot array under one of: {}",
                        RESULT_FIELD_NAMES.join(", ")
                    ))
                })?;

            let qubits = QUBIT_FIELD_NAMES.iter().find_map(|field| {
                obj.get(*field).and_then(|val| match val.as_u64() {
                    Some(n) => Some(n as usize),
                    None => {
                        warn!("Found qubit field '{}' but it is not a count: {}", field, val);
                        None
                    }
                })
            });

            Ok((shots, qubits))
        }

        _ => Err(ParseError::InvalidFormat(
            "Results must be a JSON array or object".to_string(),
        )),
    }
}

/// Parse one shot: a single result or an array of results
///
/// **Private** - internal parsing logic
fn parse_shot(index: usize, value: &Value) -> Result<Shot, ParseError> {
    let invalid = |reason: String| ParseError::InvalidResult {
        shot: index,
        reason,
    };

    match value {
        Value::Array(values) => values
            .iter()
            .map(parse_result)
            .collect::<Result<Vec<_>, _>>()
            .map(Shot::Vector)
            .map_err(invalid),
        _ => parse_result(value).map(Shot::Scalar).map_err(invalid),
    }
}

/// Parse a single result token
///
/// Accepts `"Zero"`/`"One"` (any case), `"0"`/`"1"`, `0`/`1`, and booleans.
pub fn parse_result(value: &Value) -> Result<MeasurementResult, String> {
    match value {
        Value::Bool(bit) => Ok(MeasurementResult::from(*bit)),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(MeasurementResult::Zero),
            Some(1) => Ok(MeasurementResult::One),
            _ => Err(format!("expected 0 or 1, found {}", n)),
        },
        Value::String(s) => s.parse(),
        other => Err(format!("expected a measurement result, found {}", other)),
    }
}
