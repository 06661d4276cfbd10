//! Trinket ownership ranking over the latest record of each session.

use super::filter::filter_by_class;
use super::rank::{percent, top_n, Tally};
use super::session::latest_per_session;
use crate::parser::Record;
use crate::utils::config::TRINKET_PREFIX;
use crate::utils::naming::strip_prefix;
use log::debug;
use serde::{Deserialize, Serialize};

/// How many sessions ended with a trinket equipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrinketOwnership {
    pub key: String,

    /// Identifier without the `trinket_` prefix
    pub name: String,

    /// Sessions whose latest record lists the trinket
    pub owners: u64,

    /// `owners` as a rounded share of all sessions
    pub percent_owned: u32,
}

impl TrinketOwnership {
    /// Display statistic, e.g. `"40% owned"`
    pub fn stat(&self) -> String {
        format!("{}% owned", self.percent_owned)
    }
}

/// Most commonly owned trinkets at the end of a session
///
/// **Public** - percentages use the filtered, de-duplicated session count
///
/// A trinket listed twice in one record counts twice. Ownership is not
/// de-duplicated within a record.
pub fn top_trinkets(records: &[Record], selected_class: &str, n: usize) -> Vec<TrinketOwnership> {
    let latest = latest_per_session(filter_by_class(records, selected_class));
    let total_sessions = latest.len() as u64;

    let mut owners: Tally<u64> = Tally::new();
    for record in &latest {
        for trinket in record.trinket_list() {
            *owners.entry(trinket) += 1;
        }
    }

    debug!(
        "Counted {} distinct trinkets across {} sessions",
        owners.len(),
        total_sessions
    );

    let ranked = top_n(owners.into_entries(), n, |(_, count)| *count);
    ranked
        .into_iter()
        .map(|(key, count)| TrinketOwnership {
            name: strip_prefix(&key, TRINKET_PREFIX).to_string(),
            key,
            owners: count,
            percent_owned: percent(count, total_sessions),
        })
        .collect()
}
