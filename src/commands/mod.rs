//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod orders;
pub mod utils;

// Re-export main command functions
pub use analyze::{
    analyze_orders, build_report, execute_analyze, format_summary, validate_args, Analysis,
    AnalyzeArgs,
};
pub use orders::{format_order, list_orders};
pub use utils::{display_version, inspect_report, validate_input_file};
