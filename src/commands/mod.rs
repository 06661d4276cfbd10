//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod pairs;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{PairArgs, PinnedItem, ReportArgs, ReportOptions};
pub use pairs::{execute_pairs, pair_chart, validate_pair_args};
pub use report::{build_report, execute_report, render_dashboard, validate_args, validate_options, DashboardView};
pub use utils::{display_schema, display_version, validate_dataset};
