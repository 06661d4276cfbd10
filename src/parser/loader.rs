//! Dataset loading.
//!
//! A dataset is a JSON array of telemetry records, read once from a file
//! or fetched once over HTTP. Elements that are not JSON objects are
//! skipped with a warning.

use super::record::Record;
use crate::remote::DatasetClient;
use crate::utils::error::LoadError;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a dataset from a file path or an `http(s)://` URL
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::Io` - File cannot be read
/// * `LoadError::Http` / `LoadError::HttpStatus` - Fetch failed
/// * `LoadError::Json` - Content is not valid JSON
/// * `LoadError::InvalidFormat` - Top-level value is not an array
pub fn load_dataset(source: &str) -> Result<Vec<Record>, LoadError> {
    if is_remote(source) {
        let client = DatasetClient::new()?;
        let raw = client.fetch(source)?;
        parse_dataset(&raw)
    } else {
        load_dataset_file(source)
    }
}

/// Read and parse a dataset file
pub fn load_dataset_file(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    info!("Loading dataset from: {}", path.display());

    let file = File::open(path)?;
    let raw: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_dataset(&raw)
}

/// Parse a dataset from JSON text
pub fn parse_dataset_str(text: &str) -> Result<Vec<Record>, LoadError> {
    let raw: Value = serde_json::from_str(text)?;
    parse_dataset(&raw)
}

/// Convert an already-decoded JSON value into records
pub fn parse_dataset(raw: &Value) -> Result<Vec<Record>, LoadError> {
    let items = raw.as_array().ok_or_else(|| {
        LoadError::InvalidFormat(format!(
            "expected a JSON array of records, found {}",
            json_kind(raw)
        ))
    })?;

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0usize;

    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            warn!("Skipping dataset element {}: not an object", index);
            skipped += 1;
            continue;
        }
        match Record::deserialize(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping dataset element {}: {}", index, e);
                skipped += 1;
            }
        }
    }

    debug!("Parsed {} records ({} skipped)", records.len(), skipped);
    Ok(records)
}

/// Whether `source` names a remote dataset
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Summary of a loaded dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStats {
    pub record_count: usize,
    pub session_count: usize,
    /// Records per player class, sorted by class name
    pub classes: BTreeMap<String, usize>,
    /// Records without a player class
    pub unclassed: usize,
}

/// Count records, sessions and classes
pub fn dataset_stats(records: &[Record]) -> DatasetStats {
    let mut stats = DatasetStats {
        record_count: records.len(),
        ..Default::default()
    };
    let mut sessions = HashSet::new();

    for record in records {
        sessions.insert(record.session_id.as_str());
        match &record.player_class {
            Some(class) => *stats.classes.entry(class.clone()).or_insert(0) += 1,
            None => stats.unclassed += 1,
        }
    }

    stats.session_count = sessions.len();
    stats
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
