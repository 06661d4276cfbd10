use std::io::Write;
use telemetry_dashboard::parser::numeric::{parse_float_prefix, parse_int_prefix};
use telemetry_dashboard::parser::{
    dataset_stats, load_dataset, load_dataset_file, parse_dataset_str, Record,
};
use telemetry_dashboard::utils::LoadError;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"[
    {
        "sessionId": "abc",
        "timestamp": 1718000000,
        "playerClass": "kitsunagi",
        "floor": 4,
        "comboUseCounts": { "keys": ["fox_dance"], "values": ["3"] },
        "cardUseCounts": { "keys": ["card_fire_bolt"], "values": ["12"] },
        "trinkets": ["trinket_lucky_coin"],
        "averageOutgoingDamage": "17.25",
        "winnerIndex": "2",
        "enemyClass": "enemy_Stone_Golem",
        "extraField": { "ignored": true }
    },
    null,
    { "sessionId": 99, "timestamp": "12" }
]"#;

#[test]
fn test_parse_sample_dataset() {
    let records = parse_dataset_str(SAMPLE).unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.session_id, "abc");
    assert_eq!(first.floor_reached(), 4);
    assert_eq!(first.damage(), Some(17.25));
    assert!(first.is_win());

    let second = &records[1];
    assert_eq!(second.session_id, "99");
    assert_eq!(second.timestamp, 12.0);
}

#[test]
fn test_load_dataset_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let records = load_dataset_file(file.path()).unwrap();
    assert_eq!(records.len(), 2);

    let via_source = load_dataset(file.path().to_str().unwrap()).unwrap();
    assert_eq!(via_source, records);
}

#[test]
fn test_load_missing_file() {
    let result = load_dataset("definitely/not/here.json");
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn test_load_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[{\"sessionId\": ").unwrap();

    let result = load_dataset_file(file.path());
    assert!(matches!(result, Err(LoadError::Json(_))));
}

#[test]
fn test_load_wrong_top_level() {
    let result = parse_dataset_str(r#"{"sessionId": "abc"}"#);
    assert!(matches!(result, Err(LoadError::InvalidFormat(_))));
}

#[test]
fn test_dataset_stats_on_sample() {
    let records = parse_dataset_str(SAMPLE).unwrap();
    let stats = dataset_stats(&records);
    assert_eq!(stats.session_count, 2);
    assert_eq!(stats.classes.get("kitsunagi"), Some(&1));
    assert_eq!(stats.unclassed, 1);
}

#[test]
fn test_record_round_trips_through_json() {
    let records = parse_dataset_str(SAMPLE).unwrap();
    let text = serde_json::to_string(&records[0]).unwrap();
    let back: Record = serde_json::from_str(&text).unwrap();
    assert_eq!(back, records[0]);
}

#[test]
fn test_numeric_prefix_parsing() {
    assert_eq!(parse_int_prefix(" 7 uses"), Some(7));
    assert_eq!(parse_int_prefix("uses"), None);
    assert_eq!(parse_float_prefix("3.5e1x"), Some(35.0));
    assert_eq!(parse_float_prefix("NaN"), None);
}
