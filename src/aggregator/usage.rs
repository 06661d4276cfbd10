//! Cumulative combo and card usage rankings.
//!
//! Usage counts add up across every matching record, with no session
//! de-duplication: each snapshot contributes its own counts.

use super::filter::filter_by_class;
use super::rank::{top_n, Ranked, Tally};
use crate::parser::{Record, UseCounts};
use crate::utils::config::CARD_PREFIX;
use crate::utils::naming::display_name;
use log::debug;

/// Most-used combos, labelled by their raw keys
///
/// An unparseable or missing count adds 0, so the combo still appears.
pub fn top_combos(records: &[Record], selected_class: &str, n: usize) -> Vec<Ranked<i64>> {
    let mut totals: Tally<i64> = Tally::new();

    for record in filter_by_class(records, selected_class) {
        let Some(counts) = &record.combo_use_counts else {
            continue;
        };
        for (combo, count) in counts.entries() {
            let total = totals.entry(combo);
            *total = total.saturating_add(count.unwrap_or(0));
        }
    }

    debug!("Tallied {} distinct combos", totals.len());

    let ranked = totals
        .into_entries()
        .into_iter()
        .map(|(key, total)| Ranked::new(key.clone(), key, total))
        .collect();
    top_n(ranked, n, |entry: &Ranked<i64>| entry.value)
}

/// Most-used cards, with display names
///
/// Records missing either parallel array are skipped, as are entries
/// whose count does not parse.
pub fn top_cards(records: &[Record], selected_class: &str, n: usize) -> Vec<Ranked<i64>> {
    let mut totals: Tally<i64> = Tally::new();

    for record in filter_by_class(records, selected_class) {
        let Some(counts) = record.card_use_counts.as_ref().filter(|c| c.is_complete()) else {
            continue;
        };
        accumulate_parsed(counts, &mut totals);
    }

    debug!("Tallied {} distinct cards", totals.len());

    let ranked = totals
        .into_entries()
        .into_iter()
        .map(|(key, total)| {
            let name = display_name(&key, CARD_PREFIX);
            Ranked::new(key, name, total)
        })
        .collect();
    top_n(ranked, n, |entry: &Ranked<i64>| entry.value)
}

fn accumulate_parsed(counts: &UseCounts, totals: &mut Tally<i64>) {
    for (card, count) in counts.entries() {
        if let Some(count) = count {
            let total = totals.entry(card);
            *total = total.saturating_add(count);
        }
    }
}
