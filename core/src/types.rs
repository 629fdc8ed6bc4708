use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Konfigurasjon for analysen. Alle felt er valgfrie; defaults løses i kode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cfg {
    pub discipline: Option<String>,
    pub discipline_substring_match: Option<bool>,
    pub variant_marker: Option<String>,
    pub freeform_kind_marker: Option<String>,
    pub freeform_title_marker: Option<String>,
    pub favorite_day_min_count: Option<u32>,
}

impl Cfg {
    pub fn discipline(&self) -> &str {
        self.discipline.as_deref().unwrap_or("Cycling")
    }

    pub fn discipline_substring_match(&self) -> bool {
        self.discipline_substring_match.unwrap_or(false)
    }

    pub fn variant_marker(&self) -> &str {
        self.variant_marker.as_deref().unwrap_or("lanebreak")
    }

    pub fn freeform_kind_marker(&self) -> &str {
        self.freeform_kind_marker.as_deref().unwrap_or("just")
    }

    pub fn freeform_title_marker(&self) -> &str {
        self.freeform_title_marker.as_deref().unwrap_or("just ride")
    }

    pub fn favorite_day_min_count(&self) -> u32 {
        self.favorite_day_min_count.unwrap_or(3)
    }
}

/// Etikett/antall-par i første-forekomst-rekkefølge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// Én PR-oppføring. Sekundærfelt beholdes ordrett fra eksporten;
/// manglende verdier er None og rendres som plassholder av mottakeren.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrEntry {
    pub length_min: u32,
    pub output_kj: f64,
    pub class_timestamp: Option<String>,
    pub workout_timestamp: Option<String>,
    pub class_instant: Option<DateTime<FixedOffset>>,
    pub instructor: String,
    pub kind: Option<String>,
    pub avg_watts: Option<String>,
    pub avg_resistance: Option<String>,
    pub avg_cadence: Option<String>,
    pub avg_speed: Option<String>,
    pub distance_km: Option<String>,
    pub calories: Option<String>,
    pub avg_heartrate: Option<String>,
}

/// Favorittukedag: 0 = søndag .. 6 = lørdag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteDay {
    pub day: String,
    pub day_index: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreakReport {
    pub strict: u32,
    pub gap_tolerant: u32,
    pub favorite_day: Option<FavoriteDay>,
}

/// Additive totaler over ett sett rader. Utolkbare tallfelt teller som 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_records: u64,
    pub total_minutes: f64,
    pub total_distance_km: f64,
    pub total_calories: f64,
    pub total_output_kj: f64,
    pub per_instructor_minutes: BTreeMap<String, f64>,
}

/// Avledede sammenligninger med faste konstanter (se summary.rs).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunStats {
    pub big_macs: f64,
    pub tv_hours: f64,
    pub around_world_pct: f64,
    pub to_moon_pct: f64,
    pub car_engine_hours: f64,
    pub light_bulb_days: f64,
}

/// Komplett analyseresultat – ren data, klar for serialisering mot
/// presentasjonslaget. Ingen referanser tilbake til rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoryReport {
    pub discipline_distribution: Distribution,
    pub duration_distribution: Distribution,
    pub instructor_leaderboard: Distribution,
    pub regular_prs: BTreeMap<u32, Vec<PrEntry>>,
    pub lanebreak_prs: BTreeMap<u32, Vec<PrEntry>>,
    pub streaks: StreakReport,
    pub totals: Totals,
    pub fun_stats: FunStats,
}
