// core/src/streaks.rs
use chrono::{Datelike, NaiveDate};

use crate::models::WorkoutRecord;
use crate::types::FavoriteDay;

/// Strict: bare nøyaktig påfølgende dager forlenger rekken.
/// GapTolerant: ett enkelt hull (nøyaktig én manglende dag) broes og
/// binder rekken sammen; broen teller ikke selv, bare aktive dager.
/// Hull på 2+ manglende dager broes aldri.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Strict,
    GapTolerant,
}

/// Lengste rekke av aktive kalenderdager under valgt policy.
/// Dagmengden dedupliseres på normalisert lokal dato, uavhengig av
/// klokkeslett. Minst én dag gir minst 1; ingen dager gir 0.
pub fn longest_streak(records: &[&WorkoutRecord], policy: Policy) -> u32 {
    let days = unique_days(records);
    if days.is_empty() {
        return 0;
    }

    let mut best = 1u32;
    let mut run = 1u32;
    for w in days.windows(2) {
        let gap = (w[1] - w[0]).num_days();
        let extends = gap == 1 || (policy == Policy::GapTolerant && gap == 2);
        if extends {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    best
}

fn unique_days(records: &[&WorkoutRecord]) -> Vec<NaiveDate> {
    let mut skipped = 0usize;
    let mut days: Vec<NaiveDate> = records
        .iter()
        .filter_map(|r| {
            let instant = r.workout_instant;
            if instant.is_none() {
                skipped += 1;
            }
            instant.map(|i| i.date_naive())
        })
        .collect();
    if skipped > 0 {
        log::debug!("{skipped} rader uten tolkbar dato holdt utenfor streak-beregning");
    }
    days.sort();
    days.dedup();
    days
}

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Ukedagen med flest økter, telt per rad (ikke per unik dag).
/// Returnerer None under minstekravet; likt antall går til den første
/// dagen i rekkefølgen søndag..lørdag.
pub fn favorite_day_of_week(records: &[&WorkoutRecord], min_count: u32) -> Option<FavoriteDay> {
    let mut counts = [0u32; 7];
    for r in records {
        if let Some(instant) = r.workout_instant {
            counts[instant.weekday().num_days_from_sunday() as usize] += 1;
        }
    }

    let mut best_idx = 0usize;
    let mut best = 0u32;
    for (i, &c) in counts.iter().enumerate() {
        if c > best {
            best = c;
            best_idx = i;
        }
    }

    if best >= min_count.max(1) {
        Some(FavoriteDay {
            day: DAY_NAMES[best_idx].to_string(),
            day_index: best_idx as u32,
            count: best,
        })
    } else {
        None
    }
}
