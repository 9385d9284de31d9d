//! Configuration and constants for the library and CLI.
//!
//! Plot settings can also be loaded from a TOML file; every field is
//! optional and command-line flags take precedence over file values.

use crate::aggregator::Basis;
use crate::chart::ChartConfig;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Basis used when the caller does not name one
pub const DEFAULT_BASIS: &str = "Z";

/// Default SVG chart dimensions in pixels
pub const DEFAULT_CHART_WIDTH: usize = 800;
pub const DEFAULT_CHART_HEIGHT: usize = 600;

/// Largest qubit count whose 2^n outcome domain we are willing to enumerate
pub const MAX_QUBITS: usize = 24;

// Field names for the shot array (different producers use different names)
pub const RESULT_FIELD_NAMES: &[&str] = &["results", "shots", "measurements", "data"];
pub const QUBIT_FIELD_NAMES: &[&str] = &["qubits", "num_qubits", "n_qubits"];

/// Plot settings loaded from a TOML file
///
/// ```toml
/// title = "Bell pair"
/// basis = "X"
/// hide_empty = true
///
/// [chart]
/// width = 1024
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlotConfig {
    /// Chart title
    #[serde(default)]
    pub title: Option<String>,

    /// Measurement basis token
    #[serde(default)]
    pub basis: Option<String>,

    /// Drop outcomes that were never observed
    #[serde(default)]
    pub hide_empty: Option<bool>,

    /// Explicit qubit count (needed for empty multi-qubit batches)
    #[serde(default)]
    pub qubits: Option<usize>,

    /// Chart styling
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Load plot settings from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::Invalid` - If a value is out of range
pub fn load_config(path: impl AsRef<Path>) -> Result<PlotConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading plot config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate plot settings from TOML text
pub fn parse_config(contents: &str) -> Result<PlotConfig, ConfigError> {
    let config: PlotConfig = toml::from_str(contents)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &PlotConfig) -> Result<(), ConfigError> {
    if let Some(basis) = &config.basis {
        basis
            .parse::<Basis>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    }

    if let Some(qubits) = config.qubits {
        if qubits == 0 || qubits > MAX_QUBITS {
            return Err(ConfigError::Invalid(format!(
                "qubits must be between 1 and {}, got {}",
                MAX_QUBITS, qubits
            )));
        }
    }

    if config.chart.width == 0 || config.chart.height == 0 {
        return Err(ConfigError::Invalid(
            "chart width and height must be positive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.title.is_none());
        assert!(config.basis.is_none());
        assert_eq!(config.chart.width, DEFAULT_CHART_WIDTH);
        assert_eq!(config.chart.height, DEFAULT_CHART_HEIGHT);
    }

    #[test]
    fn test_parse_config_full() {
        let config = parse_config(
            r#"
            title = "Bell pair"
            basis = "x"
            hide_empty = true
            qubits = 2

            [chart]
            width = 1024
            bar_color = "teal"
            "#,
        )
        .unwrap();

        assert_eq!(config.title.as_deref(), Some("Bell pair"));
        assert_eq!(config.basis.as_deref(), Some("x"));
        assert_eq!(config.hide_empty, Some(true));
        assert_eq!(config.qubits, Some(2));
        assert_eq!(config.chart.width, 1024);
        assert_eq!(config.chart.height, DEFAULT_CHART_HEIGHT);
        assert_eq!(config.chart.bar_color, "teal");
    }

    #[test]
    fn test_parse_config_rejects_bad_basis() {
        let err = parse_config(r#"basis = "Y""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_config_rejects_zero_qubits() {
        assert!(parse_config("qubits = 0").is_err());
    }

    #[test]
    fn test_parse_config_rejects_bad_toml() {
        let err = parse_config("title = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }
}
