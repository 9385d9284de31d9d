//! Measurement result parsing.
//!
//! This module handles:
//! - Reading result files from disk
//! - Detecting bare-array and object layouts
//! - Converting result tokens into typed shots

pub mod results;

// Re-export main types
pub use results::{parse_result, parse_results, read_results, ParsedResults};
