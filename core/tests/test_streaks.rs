// core/tests/test_streaks.rs
use serde_json::json;

use ridegraph_core::models::{RawRow, WorkoutRecord};
use ridegraph_core::streaks::{favorite_day_of_week, longest_streak};
use ridegraph_core::Policy;

fn on(workout_ts: &str) -> WorkoutRecord {
    let raw: RawRow = serde_json::from_value(json!({
        "Fitness Discipline": "Cycling",
        "Workout Timestamp": workout_ts
    }))
    .unwrap();
    WorkoutRecord::from_raw(&raw)
}

fn days(dates: &[&str]) -> Vec<WorkoutRecord> {
    dates.iter().map(|d| on(&format!("{d} 09:00 (EST)"))).collect()
}

#[test]
fn single_missing_day_is_bridged_only_by_gap_tolerant() {
    // D, D+1, D+3: hullet på nøyaktig én dag broes
    let records = days(&["2023-03-01", "2023-03-02", "2023-03-04"]);
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(longest_streak(&refs, Policy::Strict), 2);
    assert_eq!(longest_streak(&refs, Policy::GapTolerant), 3);
}

#[test]
fn wider_gaps_are_never_bridged() {
    // D, D+1, D+5: hull på fire dager stopper begge policyene
    let records = days(&["2023-03-01", "2023-03-02", "2023-03-06"]);
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(longest_streak(&refs, Policy::Strict), 2);
    assert_eq!(longest_streak(&refs, Policy::GapTolerant), 2);
}

#[test]
fn multiple_sessions_on_one_day_count_once() {
    // To økter samme dag dedupliseres på kalenderdag
    let records = vec![
        on("2023-03-01 06:00 (EST)"),
        on("2023-03-01 18:30 (EST)"),
        on("2023-03-02 09:00 (EST)"),
    ];
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(longest_streak(&refs, Policy::Strict), 2);
}

#[test]
fn unparseable_dates_are_skipped_not_fatal() {
    let mut records = days(&["2023-03-01", "2023-03-02"]);
    records.push(on("ikke en dato"));
    let refs: Vec<_> = records.iter().collect();

    assert_eq!(longest_streak(&refs, Policy::Strict), 2);
}

#[test]
fn empty_input_gives_zero_and_one_day_gives_one() {
    assert_eq!(longest_streak(&[], Policy::Strict), 0);
    assert_eq!(longest_streak(&[], Policy::GapTolerant), 0);

    let records = days(&["2023-03-01"]);
    let refs: Vec<_> = records.iter().collect();
    assert_eq!(longest_streak(&refs, Policy::Strict), 1);
}

#[test]
fn favorite_day_requires_minimum_count() {
    // Tre mandager og to tirsdager (mars 2023)
    let records = days(&[
        "2023-03-06", "2023-03-13", "2023-03-20", // mandager
        "2023-03-07", "2023-03-14", // tirsdager
    ]);
    let refs: Vec<_> = records.iter().collect();

    let fav = favorite_day_of_week(&refs, 3).expect("three Mondays reach the gate");
    assert_eq!(fav.day, "Monday");
    assert_eq!(fav.day_index, 1);
    assert_eq!(fav.count, 3);

    // Maks to på én ukedag: under minstekravet
    let sparse = days(&["2023-03-06", "2023-03-13", "2023-03-07", "2023-03-14"]);
    let sparse_refs: Vec<_> = sparse.iter().collect();
    assert_eq!(favorite_day_of_week(&sparse_refs, 3), None);
}

#[test]
fn favorite_day_ties_go_to_the_first_weekday_from_sunday() {
    // Tre søndager og tre mandager: søndag kommer først i rekkefølgen
    let records = days(&[
        "2023-03-05", "2023-03-12", "2023-03-19", // søndager
        "2023-03-06", "2023-03-13", "2023-03-20", // mandager
    ]);
    let refs: Vec<_> = records.iter().collect();

    let fav = favorite_day_of_week(&refs, 3).unwrap();
    assert_eq!(fav.day, "Sunday");
    assert_eq!(fav.day_index, 0);
}

#[test]
fn favorite_day_with_no_records_is_none() {
    assert_eq!(favorite_day_of_week(&[], 3), None);
}
