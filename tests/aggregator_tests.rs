use pretty_assertions::assert_eq;
use serde_json::json;
use telemetry_dashboard::aggregator::{
    best_card_pairs, best_trinket_pairs, filter_by_class, floor_histogram, latest_per_session,
    top_cards, top_combos, top_enemies, top_trinkets, Ranked,
};
use telemetry_dashboard::parser::{parse_dataset, Record};

fn dataset(value: serde_json::Value) -> Vec<Record> {
    parse_dataset(&value).unwrap()
}

fn mixed_dataset() -> Vec<Record> {
    dataset(json!([
        {
            "sessionId": "s1", "timestamp": 1, "playerClass": "kitsunagi", "floor": 1,
            "comboUseCounts": { "keys": ["fox_dance", "slash"], "values": ["2", "5"] },
            "cardUseCounts": { "keys": ["card_fire_bolt", "card_ice"], "values": ["4", "1"] },
            "trinkets": ["trinket_coin"],
            "averageOutgoingDamage": "10",
            "winnerIndex": "2", "enemyClass": "enemy_slime"
        },
        {
            "sessionId": "s1", "timestamp": 2, "playerClass": "kitsunagi", "floor": 3,
            "comboUseCounts": { "keys": ["fox_dance"], "values": ["7"] },
            "cardUseCounts": { "keys": ["card_fire_bolt", "card_ward"], "values": ["2", "3"] },
            "trinkets": ["trinket_coin", "trinket_ring"],
            "averageOutgoingDamage": "30",
            "winnerIndex": "1", "enemyClass": "enemy_bat"
        },
        {
            "sessionId": "s2", "timestamp": 5, "playerClass": "ronin", "floor": 6,
            "comboUseCounts": { "keys": ["slash"], "values": ["1"] },
            "cardUseCounts": { "keys": ["card_ice"], "values": ["9"] },
            "trinkets": ["trinket_ring"],
            "averageOutgoingDamage": "abc",
            "winnerIndex": "2", "enemyClass": "enemy_bat"
        },
        {
            "sessionId": "s3", "timestamp": 1, "floor": 0,
            "trinkets": ["trinket_coin", "trinket_fang"],
            "averageOutgoingDamage": 50,
            "winnerIndex": "2", "enemyClass": "enemy_slime"
        }
    ]))
}

fn assert_non_increasing<T>(values: &[T])
where
    T: PartialOrd + std::fmt::Debug,
{
    for pair in values.windows(2) {
        assert!(pair[0] >= pair[1], "not sorted descending: {:?}", values);
    }
}

#[test]
fn test_filter_all_is_identity() {
    let records = mixed_dataset();
    let filtered: Vec<Record> = filter_by_class(&records, "all").into_iter().cloned().collect();
    assert_eq!(filtered, records);
}

#[test]
fn test_filter_unknown_class_matches_nothing() {
    let records = mixed_dataset();
    assert!(filter_by_class(&records, "paladin").is_empty());
    assert_eq!(floor_histogram(&records, "paladin"), [0; 5]);
    assert!(top_trinkets(&records, "paladin", 5).is_empty());
    assert!(top_enemies(&records, "paladin", 5).is_empty());
}

#[test]
fn test_floor_histogram_uses_latest_snapshot() {
    let records = dataset(json!([
        { "sessionId": "run", "timestamp": 1, "floor": 1 },
        { "sessionId": "run", "timestamp": 2, "floor": 3 },
        { "sessionId": "run", "timestamp": 3, "floor": 5 }
    ]));
    assert_eq!(floor_histogram(&records, "all"), [0, 0, 0, 0, 1]);
}

#[test]
fn test_floor_histogram_total_below_session_count() {
    let records = mixed_dataset();
    let bins = floor_histogram(&records, "all");
    let sessions = latest_per_session(&records).len() as u64;

    // s3 ended on floor 0, which is not binned
    assert_eq!(bins, [0, 0, 1, 0, 1]);
    assert!(bins.iter().sum::<u64>() < sessions);
}

#[test]
fn test_combo_ranking_is_cumulative() {
    let records = mixed_dataset();
    let combos = top_combos(&records, "all", 5);
    assert_eq!(
        combos,
        vec![
            Ranked::new("fox_dance", "fox_dance", 9),
            Ranked::new("slash", "slash", 6),
        ]
    );

    let kitsunagi = top_combos(&records, "kitsunagi", 5);
    assert_eq!(kitsunagi[1], Ranked::new("slash", "slash", 5));
}

#[test]
fn test_card_ranking_skips_unparseable_counts() {
    let records = dataset(json!([
        { "cardUseCounts": { "keys": ["card_a", "card_b"], "values": ["3", "x"] } }
    ]));
    assert_eq!(top_cards(&records, "all", 5), vec![Ranked::new("card_a", "a", 3)]);
}

#[test]
fn test_card_ranking_display_names() {
    let records = mixed_dataset();
    let cards = top_cards(&records, "all", 2);
    assert_eq!(
        cards,
        vec![
            Ranked::new("card_ice", "ice", 10),
            Ranked::new("card_fire_bolt", "fire bolt", 6),
        ]
    );
}

#[test]
fn test_trinket_ownership_against_filtered_sessions() {
    let records = mixed_dataset();

    let all = top_trinkets(&records, "all", 5);
    let summary: Vec<(&str, u64, u32)> = all
        .iter()
        .map(|t| (t.name.as_str(), t.owners, t.percent_owned))
        .collect();
    assert_eq!(
        summary,
        vec![("coin", 2, 67), ("ring", 2, 67), ("fang", 1, 33)]
    );

    // One kitsunagi session: percentages use 1, not the 3 sessions overall
    let kitsunagi = top_trinkets(&records, "kitsunagi", 5);
    assert!(kitsunagi.iter().all(|t| t.percent_owned == 100));
    assert!(kitsunagi.iter().all(|t| t.percent_owned <= 100));
}

#[test]
fn test_enemy_win_share() {
    let records = dataset(json!([
        { "winnerIndex": "2", "enemyClass": "enemy_x" },
        { "winnerIndex": "2", "enemyClass": "enemy_x" },
        { "winnerIndex": "2", "enemyClass": "enemy_y" },
        { "winnerIndex": "1", "enemyClass": "enemy_y" }
    ]));
    let enemies = top_enemies(&records, "all", 5);
    let rates: Vec<(&str, u32)> = enemies.iter().map(|e| (e.name.as_str(), e.win_rate)).collect();
    assert_eq!(rates, vec![("x", 67), ("y", 33)]);
}

#[test]
fn test_trinket_pairs_ignore_unparseable_damage() {
    let mut records = dataset(json!([
        { "trinkets": ["trinket_coin", "trinket_ring"], "averageOutgoingDamage": "20" },
        { "trinkets": ["trinket_coin", "trinket_fang"], "averageOutgoingDamage": "8" }
    ]));
    let baseline = best_trinket_pairs(&records, "all", "trinket_coin", 5);

    records.extend(dataset(json!([
        { "trinkets": ["trinket_coin", "trinket_ring"], "averageOutgoingDamage": "abc" }
    ])));
    let with_garbage = best_trinket_pairs(&records, "all", "trinket_coin", 5);

    assert_eq!(with_garbage, baseline);
    assert_eq!(
        baseline,
        vec![
            Ranked::new("trinket_ring", "ring", 20.0),
            Ranked::new("trinket_fang", "fang", 8.0),
        ]
    );
}

#[test]
fn test_card_pairs_pin_by_display_name() {
    let records = mixed_dataset();
    let pairs = best_card_pairs(&records, "all", "Fire Bolt", 5);
    assert_eq!(
        pairs,
        vec![
            Ranked::new("card_ward", "ward", 30),
            Ranked::new("card_ice", "ice", 10),
        ]
    );
}

#[test]
fn test_rankings_sorted_and_bounded() {
    let records = mixed_dataset();
    for n in 1..=4 {
        let combos = top_combos(&records, "all", n);
        assert!(combos.len() <= n);
        assert_non_increasing(&combos.iter().map(|c| c.value).collect::<Vec<_>>());

        let cards = top_cards(&records, "all", n);
        assert!(cards.len() <= n);
        assert_non_increasing(&cards.iter().map(|c| c.value).collect::<Vec<_>>());

        let trinkets = top_trinkets(&records, "all", n);
        assert!(trinkets.len() <= n);
        assert_non_increasing(&trinkets.iter().map(|t| t.owners).collect::<Vec<_>>());

        let enemies = top_enemies(&records, "all", n);
        assert!(enemies.len() <= n);
        assert_non_increasing(&enemies.iter().map(|e| e.win_rate).collect::<Vec<_>>());

        let trinket_pairs = best_trinket_pairs(&records, "all", "trinket_coin", n);
        assert!(trinket_pairs.len() <= n);
        assert_non_increasing(&trinket_pairs.iter().map(|p| p.value).collect::<Vec<_>>());

        let card_pairs = best_card_pairs(&records, "all", "card_fire_bolt", n);
        assert!(card_pairs.len() <= n);
        assert_non_increasing(&card_pairs.iter().map(|p| p.value).collect::<Vec<_>>());
    }
}

#[test]
fn test_card_counts_stay_aligned_with_non_string_keys() {
    let records = dataset(json!([
        { "cardUseCounts": { "keys": [7, "card_b"], "values": ["100", "1"] } }
    ]));
    let cards = top_cards(&records, "all", 5);
    let card_b = cards.iter().find(|c| c.key == "card_b").map(|c| c.value);
    assert_eq!(card_b, Some(1));
    assert_eq!(cards[0], Ranked::new("7", "7", 100));
}

#[test]
fn test_enemy_share_counts_wins_without_enemy() {
    let records = dataset(json!([
        { "winnerIndex": "2", "enemyClass": "enemy_x" },
        { "winnerIndex": "2", "enemyClass": "enemy_x" },
        { "winnerIndex": "2" }
    ]));
    let enemies = top_enemies(&records, "all", 5);
    let rates: Vec<(&str, u32)> = enemies.iter().map(|e| (e.name.as_str(), e.win_rate)).collect();
    assert_eq!(rates, vec![("x", 67)]);
}

#[test]
fn test_usage_totals_do_not_overflow() {
    let records = dataset(json!([
        {
            "comboUseCounts": { "keys": ["slash"], "values": ["99999999999999999999"] },
            "cardUseCounts": { "keys": ["card_a"], "values": ["99999999999999999999"] }
        },
        {
            "comboUseCounts": { "keys": ["slash"], "values": ["1"] },
            "cardUseCounts": { "keys": ["card_a"], "values": ["1"] }
        }
    ]));
    assert_eq!(top_combos(&records, "all", 5)[0].value, i64::MAX);
    assert_eq!(top_cards(&records, "all", 5)[0].value, i64::MAX);
}

#[test]
fn test_fractional_floor_is_not_binned() {
    let records = dataset(json!([
        { "sessionId": "a", "timestamp": 1, "floor": 2.5 },
        { "sessionId": "b", "timestamp": 1, "floor": 2 }
    ]));
    assert_eq!(floor_histogram(&records, "all"), [0, 1, 0, 0, 0]);
}
