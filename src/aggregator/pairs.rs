//! Co-occurrence analysis around a pinned trinket or card.
//!
//! For every record that carries the pinned item and a usable damage
//! value, each other item in the same record is credited with that
//! record's damage. The ranking is the mean damage per co-item.

use super::filter::filter_by_class;
use super::rank::{round_tenths, top_n, Ranked, Tally};
use crate::parser::Record;
use crate::utils::config::{CARD_PREFIX, TRINKET_PREFIX};
use crate::utils::naming::{display_name, to_identifier};
use log::debug;

/// Running damage total for one co-occurring item
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DamageSum {
    pub total: f64,
    pub count: u64,
}

impl DamageSum {
    pub fn add(&mut self, damage: f64) {
        self.total += damage;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Trinkets ranked by mean damage when equipped alongside `trinket_id`
///
/// **Public** - `trinket_id` must be the full identifier
/// (`trinket_lucky_coin`). Means are rounded to one decimal.
///
/// Records without the pinned trinket or without a parseable damage are
/// excluded. Any parseable damage counts, including zero and negatives.
pub fn best_trinket_pairs(
    records: &[Record],
    selected_class: &str,
    trinket_id: &str,
    n: usize,
) -> Vec<Ranked<f64>> {
    let mut sums: Tally<DamageSum> = Tally::new();

    for record in filter_by_class(records, selected_class) {
        let trinkets = record.trinket_list();
        if !trinkets.iter().any(|t| t == trinket_id) {
            continue;
        }
        let Some(damage) = record.damage() else {
            continue;
        };
        for other in trinkets.iter().filter(|t| *t != trinket_id) {
            sums.entry(other).add(damage);
        }
    }

    debug!("{} trinkets co-occur with {}", sums.len(), trinket_id);

    let averaged = sums
        .into_entries()
        .into_iter()
        .map(|(key, sum)| {
            let name = display_name(&key, TRINKET_PREFIX);
            Ranked::new(key, name, round_tenths(sum.mean()))
        })
        .collect();
    top_n(averaged, n, |entry: &Ranked<f64>| entry.value)
}

/// Cards ranked by mean damage when played alongside `card`
///
/// **Public** - `card` may be a full identifier or a display name
/// (`"Fire Bolt"` becomes `card_fire_bolt`). Means are rounded to the
/// nearest integer.
///
/// Only records with strictly positive damage contribute.
pub fn best_card_pairs(
    records: &[Record],
    selected_class: &str,
    card: &str,
    n: usize,
) -> Vec<Ranked<i64>> {
    let target = to_identifier(card, CARD_PREFIX);
    let mut sums: Tally<DamageSum> = Tally::new();

    for record in filter_by_class(records, selected_class) {
        let Some(counts) = &record.card_use_counts else {
            continue;
        };
        let Some(cards) = counts.keys.as_deref() else {
            continue;
        };
        let Some(damage) = record.damage().filter(|d| *d > 0.0) else {
            continue;
        };
        if !cards.iter().any(|c| *c == target) {
            continue;
        }
        for other in cards.iter().filter(|c| **c != target) {
            sums.entry(other).add(damage);
        }
    }

    debug!("{} cards co-occur with {}", sums.len(), target);

    let averaged: Vec<(String, f64)> = sums
        .into_entries()
        .into_iter()
        .map(|(key, sum)| (key, sum.mean()))
        .filter(|(_, mean)| mean.is_finite())
        .collect();

    top_n(averaged, n, |(_, mean)| *mean)
        .into_iter()
        .map(|(key, mean)| {
            let name = display_name(&key, CARD_PREFIX);
            Ranked::new(key, name, mean.round() as i64)
        })
        .collect()
}
