//! Highest-floor histogram over the latest record of each session.

use super::filter::filter_by_class;
use super::session::latest_per_session;
use crate::parser::Record;
use crate::utils::config::FLOOR_BIN_COUNT;
use log::debug;

/// Bin index for a floor value
///
/// Floors 1-4 map to bins 0-3, anything from 5 up to bin 4. Floor 0 (and
/// any negative value) is not counted.
pub fn floor_bin(floor: i64) -> Option<usize> {
    match floor {
        f if f >= FLOOR_BIN_COUNT as i64 => Some(FLOOR_BIN_COUNT - 1),
        f if f >= 1 => Some((f - 1) as usize),
        _ => None,
    }
}

/// Count sessions by the highest floor their latest record reached
///
/// **Public** - bins align with `FLOOR_LABELS` (`"1"`..`"4"`, `"5+"`)
pub fn floor_histogram(records: &[Record], selected_class: &str) -> [u64; FLOOR_BIN_COUNT] {
    let latest = latest_per_session(filter_by_class(records, selected_class));

    let mut bins = [0u64; FLOOR_BIN_COUNT];
    for record in &latest {
        if let Some(bin) = floor_bin(record.floor_reached()) {
            bins[bin] += 1;
        }
    }

    debug!("Floor histogram over {} sessions: {:?}", latest.len(), bins);
    bins
}
