//! Session de-duplication.
//!
//! "Current state" questions (floor reached, trinkets equipped) are
//! answered from each session's latest record only.

use crate::parser::Record;
use log::debug;
use std::collections::HashMap;

/// Keep the record with the greatest timestamp in each session
///
/// **Public** - used by the floor histogram and trinket ownership
///
/// On equal timestamps the first record seen wins. Sessions come back in
/// the order they first appear in `records`.
pub fn latest_per_session<'a, I>(records: I) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut latest: Vec<&'a Record> = Vec::new();

    for record in records {
        match slots.get(record.session_id.as_str()) {
            Some(&slot) => {
                if record.timestamp > latest[slot].timestamp {
                    latest[slot] = record;
                }
            }
            None => {
                slots.insert(record.session_id.as_str(), latest.len());
                latest.push(record);
            }
        }
    }

    debug!("Reduced records to {} sessions", latest.len());
    latest
}
