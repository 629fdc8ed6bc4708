// core/tests/test_distribution.rs
use serde_json::json;

use ridegraph_core::distribution::{
    count_by, discipline_distribution, duration_distribution, instructor_leaderboard,
};
use ridegraph_core::models::{RawRow, WorkoutRecord};

fn record(value: serde_json::Value) -> WorkoutRecord {
    let raw: RawRow = serde_json::from_value(value).unwrap();
    WorkoutRecord::from_raw(&raw)
}

#[test]
fn count_by_keeps_first_encounter_order() {
    let items = ["A", "A", "B"];
    let dist = count_by(&items, |s| Some(s.to_string()));

    assert_eq!(dist.labels, vec!["A", "B"]);
    assert_eq!(dist.counts, vec![2, 1]);
}

#[test]
fn missing_discipline_maps_to_unknown() {
    let records = vec![
        record(json!({ "Fitness Discipline": "Cycling" })),
        record(json!({ "Title": "mystery session" })),
        record(json!({ "Fitness Discipline": "Cycling" })),
    ];
    let refs: Vec<_> = records.iter().collect();

    let dist = discipline_distribution(&refs);

    assert_eq!(dist.labels, vec!["Cycling", "Unknown"]);
    assert_eq!(dist.counts, vec![2, 1]);
}

#[test]
fn duration_distribution_is_ascending_and_skips_missing() {
    let records = vec![
        record(json!({ "Length (minutes)": 45 })),
        record(json!({ "Length (minutes)": 20 })),
        record(json!({ "Length (minutes)": 45 })),
        record(json!({ "Title": "no length" })),
        record(json!({ "Length (minutes)": 30 })),
    ];
    let refs: Vec<_> = records.iter().collect();

    let dist = duration_distribution(&refs);

    assert_eq!(dist.labels, vec!["20 min", "30 min", "45 min"]);
    assert_eq!(dist.counts, vec![1, 1, 2]);
}

#[test]
fn leaderboard_is_top_ten_with_stable_ties() {
    // 12 instruktører: én med 3 økter, to med 2, resten med 1
    let mut records = Vec::new();
    for name in ["Alex", "Alex", "Alex", "Ben", "Ben", "Cody", "Cody"] {
        records.push(record(json!({ "Instructor Name": name })));
    }
    for i in 0..9 {
        records.push(record(json!({ "Instructor Name": format!("Solo {i}") })));
    }
    let refs: Vec<_> = records.iter().collect();

    let board = instructor_leaderboard(&refs);

    assert_eq!(board.labels.len(), 10, "leaderboard is capped at 10");
    assert_eq!(board.labels[0], "Alex");
    // Likt antall beholder første-forekomst-rekkefølgen
    assert_eq!(&board.labels[1..3], &["Ben", "Cody"]);
    assert_eq!(board.counts[..3], [3, 2, 2]);
    assert_eq!(board.labels[3], "Solo 0");
}
