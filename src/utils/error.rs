//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// A basis token that is not one of `Z`, `Z'` or `X`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported basis: {basis}. Use 'Z', 'Z'' or 'X'.")]
pub struct UnsupportedBasisError {
    /// The offending token, exactly as the caller passed it
    pub basis: String,
}

impl UnsupportedBasisError {
    pub fn new(basis: impl Into<String>) -> Self {
        Self {
            basis: basis.into(),
        }
    }
}

/// Errors that can occur while aggregating a batch of shots
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error(transparent)]
    UnsupportedBasis(#[from] UnsupportedBasisError),

    #[error("Shot {index} does not match the batch shape: expected {expected}, found {found}")]
    InconsistentShot {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Requested {requested} qubits but the results contain {found}")]
    QubitCountMismatch { requested: usize, found: usize },

    #[error("{0} qubits exceeds the enumeration limit of {1}")]
    TooManyQubits(usize, usize),
}

/// Errors that can occur while parsing a results file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid results format: {0}")]
    InvalidFormat(String),

    #[error("Invalid measurement result in shot {shot}: {reason}")]
    InvalidResult { shot: usize, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Label and frequency counts differ: {labels} labels, {frequencies} frequencies")]
    LengthMismatch { labels: usize, frequencies: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a plot configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
