//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod plot;
pub mod utils;

// Re-export main command functions
pub use models::PlotArgs;
pub use plot::{execute_plot, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
