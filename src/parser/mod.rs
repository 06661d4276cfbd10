//! Dataset parsing and schema definitions.
//!
//! This module handles:
//! - Decoding telemetry records leniently from JSON
//! - Leading-prefix number parsing for count and damage fields
//! - Loading a dataset from a file or URL
//! - Defining the report output schema

pub mod loader;
pub mod numeric;
pub mod record;
pub mod schema;

// Re-export main types
pub use loader::{dataset_stats, load_dataset, load_dataset_file, parse_dataset, parse_dataset_str, DatasetStats};
pub use record::{Record, UseCounts};
pub use schema::{DashboardReport, FloorHistogram, PairSection};
