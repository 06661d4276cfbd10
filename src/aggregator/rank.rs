//! Shared building blocks for top-N rankings.
//!
//! `Tally` accumulates per-key values in first-seen order, so a stable
//! descending sort leaves equal metrics in the order their keys first
//! appeared in the dataset.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One ranked entry: raw dataset key, display name, metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<M> {
    /// Identifier as it appears in the dataset
    pub key: String,

    /// Display-ready name
    pub name: String,

    pub value: M,
}

impl<M> Ranked<M> {
    pub fn new(key: impl Into<String>, name: impl Into<String>, value: M) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            value,
        }
    }
}

/// Insertion-ordered accumulator keyed by string
#[derive(Debug, Clone)]
pub struct Tally<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> Tally<V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Mutable access to the value for `key`, inserting a default first
    pub fn entry(&mut self, key: &str) -> &mut V {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V: Default> Default for Tally<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable sort by `metric` descending, then keep the first `n`
pub fn top_n<T, K, F>(mut items: Vec<T>, n: usize, metric: F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| metric(b).partial_cmp(&metric(a)).unwrap_or(Ordering::Equal));
    items.truncate(n);
    items
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0
pub fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Round to one decimal place
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_preserves_first_seen_order() {
        let mut tally: Tally<u64> = Tally::new();
        *tally.entry("b") += 1;
        *tally.entry("a") += 2;
        *tally.entry("b") += 3;

        assert_eq!(tally.len(), 2);
        assert_eq!(
            tally.into_entries(),
            vec![("b".to_string(), 4), ("a".to_string(), 2)]
        );
    }

    #[test]
    fn test_top_n_sorts_descending_and_truncates() {
        let items = vec![("a", 1), ("b", 5), ("c", 3), ("d", 4)];
        let top = top_n(items, 3, |(_, v)| *v);
        assert_eq!(top, vec![("b", 5), ("d", 4), ("c", 3)]);
    }

    #[test]
    fn test_top_n_is_stable_on_ties() {
        let items = vec![("first", 2), ("second", 2), ("third", 9)];
        let top = top_n(items, 5, |(_, v)| *v);
        assert_eq!(top, vec![("third", 9), ("first", 2), ("second", 2)]);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn test_round_tenths() {
        assert_eq!(round_tenths(12.34), 12.3);
        assert_eq!(round_tenths(12.36), 12.4);
        assert_eq!(round_tenths(7.0), 7.0);
    }
}
