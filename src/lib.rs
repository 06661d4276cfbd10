//! Telemetry Dashboard
//!
//! Aggregates per-session game telemetry into summary statistics
//! (floor histograms, top-N rankings, co-occurrence averages) and
//! renders them as bar charts and JSON reports.
//!
//! This crate provides the core implementation for the
//! `telemetry-dash` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! telemetry-dash report --data combined.json --class all --summary
//! telemetry-dash pairs --data combined.json --trinket "lucky coin"
//! ```
//!
//! The aggregation layer is usable on its own:
//!
//! ```ignore
//! use telemetry_dashboard::aggregator::{floor_histogram, top_combos};
//! let records = telemetry_dashboard::parser::load_dataset("combined.json")?;
//! let bins = floor_histogram(&records, "all");
//! let combos = top_combos(&records, "all", 5);
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod remote;
pub mod utils;
