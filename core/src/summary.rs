// core/src/summary.rs
use ordered_float::OrderedFloat;

use crate::models::WorkoutRecord;
use crate::types::{FunStats, Totals};

// Referanseverdier for de avledede sammenligningene.
pub const BIG_MAC_KCAL: f64 = 550.0;
pub const TV_KCAL_PER_HOUR: f64 = 100.0;
pub const EQUATOR_KM: f64 = 40_075.0;
pub const MOON_KM: f64 = 384_400.0;
pub const CAR_ENGINE_KW: f64 = 100.0;
pub const LIGHT_BULB_KW: f64 = 0.06;

/// Ren additiv reduksjon. Utolkbare tallfelt bidrar med 0.
pub fn summarize(records: &[&WorkoutRecord]) -> Totals {
    let mut totals = Totals {
        total_records: records.len() as u64,
        ..Totals::default()
    };

    for r in records {
        let minutes = f64::from(r.duration_min.unwrap_or(0));
        totals.total_minutes += minutes;
        totals.total_distance_km += r.distance_km.unwrap_or(0.0);
        totals.total_calories += r.calories.unwrap_or(0.0);
        totals.total_output_kj += r.output_kj.unwrap_or(0.0);

        let instructor = r.instructor.as_deref().unwrap_or("Unknown");
        *totals
            .per_instructor_minutes
            .entry(instructor.to_string())
            .or_insert(0.0) += minutes;
    }

    totals
}

/// Instruktøren med flest minutter. Likt antall går til det minste
/// navnet (kartet itereres sortert, bare strengt høyere bytter).
pub fn busiest_instructor(totals: &Totals) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (name, &minutes) in &totals.per_instructor_minutes {
        let better = best.map_or(true, |(_, b)| OrderedFloat(minutes) > OrderedFloat(b));
        if better {
            best = Some((name.as_str(), minutes));
        }
    }
    best
}

/// Skalardivisjoner mot faste konstanter, ingen øvrige invarianter.
pub fn fun_stats(totals: &Totals) -> FunStats {
    FunStats {
        big_macs: totals.total_calories / BIG_MAC_KCAL,
        tv_hours: totals.total_calories / TV_KCAL_PER_HOUR,
        around_world_pct: totals.total_distance_km / EQUATOR_KM * 100.0,
        to_moon_pct: totals.total_distance_km / MOON_KM * 100.0,
        car_engine_hours: totals.total_output_kj / (CAR_ENGINE_KW * 3600.0),
        light_bulb_days: totals.total_output_kj / (LIGHT_BULB_KW * 86_400.0),
    }
}
