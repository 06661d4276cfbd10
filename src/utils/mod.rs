//! Utility modules for configuration, error handling, and naming conventions.

pub mod config;
pub mod error;
pub mod naming;

// Re-export commonly used error types for convenience
pub use error::{ChartError, LoadError, OutputError};
