//! Output writers and display adapters.
//!
//! This module handles:
//! - Mapping aggregator output to display-ready views
//! - JSON dashboard reports
//! - SVG chart files

pub mod json;
pub mod presentation;
pub mod svg;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use presentation::{AssetResolver, ChartSpec, EnemyCard, StatCard};
pub use svg::{write_charts, write_svg};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Validate that an output path is writable
///
/// **Public** - shared by the JSON and SVG writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the parent directories of `path` if they are missing
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
