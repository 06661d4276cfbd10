//! Player-class filtering and pick rate.

use super::rank::round_tenths;
use crate::parser::Record;
use crate::utils::config::ALL_CLASSES;

/// Whether `record` passes the class selector
///
/// `"all"` passes everything; any other value requires an exact
/// `playerClass` match, so records without a class never match.
pub fn matches_class(record: &Record, selected: &str) -> bool {
    selected == ALL_CLASSES || record.has_class(selected)
}

/// Records matching `selected`, in dataset order
///
/// **Public** - first step of every aggregator
pub fn filter_by_class<'a>(records: &'a [Record], selected: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches_class(record, selected))
        .collect()
}

/// Share of classed records that belong to `selected`, in percent
///
/// Rounded to one decimal. `None` for `"all"`, where a pick rate has no
/// meaning. Computed over the whole dataset, not the filtered subset.
pub fn pick_rate(records: &[Record], selected: &str) -> Option<f64> {
    if selected == ALL_CLASSES {
        return None;
    }

    let classed = records.iter().filter(|r| r.player_class.is_some()).count();
    if classed == 0 {
        return Some(0.0);
    }
    let picked = records.iter().filter(|r| r.has_class(selected)).count();

    Some(round_tenths(picked as f64 / classed as f64 * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(class: Option<&str>) -> Record {
        Record {
            player_class: class.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_is_identity() {
        let records = vec![record(Some("a")), record(None), record(Some("b"))];
        let filtered = filter_by_class(&records, "all");
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().zip(&records).all(|(f, r)| std::ptr::eq(*f, r)));
    }

    #[test]
    fn test_missing_class_never_matches() {
        let records = vec![record(Some("a")), record(None)];
        assert_eq!(filter_by_class(&records, "a").len(), 1);
    }

    #[test]
    fn test_unknown_class_yields_nothing() {
        let records = vec![record(Some("a"))];
        assert!(filter_by_class(&records, "nobody").is_empty());
    }

    #[test]
    fn test_pick_rate() {
        let records = vec![
            record(Some("a")),
            record(Some("a")),
            record(Some("b")),
            record(None),
        ];
        assert_eq!(pick_rate(&records, "a"), Some(66.7));
        assert_eq!(pick_rate(&records, "b"), Some(33.3));
        assert_eq!(pick_rate(&records, "all"), None);
    }

    #[test]
    fn test_pick_rate_without_classes() {
        let records = vec![record(None)];
        assert_eq!(pick_rate(&records, "a"), Some(0.0));
    }
}
