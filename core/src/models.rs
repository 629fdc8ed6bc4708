// core/src/models.rs
use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use thiserror::Error;

use crate::dates;

/// Feil fra JSON-inngangen. Analysen selv feiler aldri; tomme eller
/// uforståelige batcher gir tomme resultater.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("rows: invalid JSON ({0})")]
    Rows(#[source] serde_path_to_error::Error<serde_json::Error>),
    #[error("cfg: invalid JSON ({0})")]
    Cfg(#[source] serde_path_to_error::Error<serde_json::Error>),
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Feltverdi fra eksporten. CSV gir strenger, JSON kan gi tall;
/// alt annet tolereres men regnes som fraværende.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FlexValue {
    Text(String),
    Num(f64),
    Flag(bool),
    Other(serde_json::Value),
}

impl FlexValue {
    /// "Truthy" i kildens forstand: ikke-tom tekst eller endelig tall
    /// ulikt null. Et numerisk null faller videre til neste alias.
    fn is_truthy(&self) -> bool {
        match self {
            FlexValue::Text(s) => !s.trim().is_empty(),
            FlexValue::Num(n) => n.is_finite() && *n != 0.0,
            FlexValue::Flag(b) => *b,
            FlexValue::Other(_) => false,
        }
    }

    fn as_text(&self) -> Option<String> {
        match self {
            FlexValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    None
                } else {
                    Some(t.to_string())
                }
            }
            FlexValue::Num(n) if n.is_finite() => Some(fmt_num(*n)),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            FlexValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            FlexValue::Num(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    fn as_u32(&self) -> Option<u32> {
        let v = self.as_f64()?;
        if (0.0..=u32::MAX as f64).contains(&v) {
            Some(v as u32)
        } else {
            None
        }
    }
}

/// Heltallige verdier uten desimalhale, ellers standardformat.
pub(crate) fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

// Aliastabeller per logisk felt, i prioritert rekkefølge:
// eksport-headeren først, snake_case-varianten etterpå.
const DISCIPLINE: &[&str] = &["Fitness Discipline", "fitness_discipline"];
const TITLE: &[&str] = &["Title", "title"];
const KIND: &[&str] = &["Type", "type"];
const LENGTH_MIN: &[&str] = &["Length (minutes)", "length_minutes"];
const TOTAL_OUTPUT: &[&str] = &["Total Output", "total_output"];
const DISTANCE_KM: &[&str] = &["Distance (km)", "distance_km"];
const CALORIES: &[&str] = &["Calories Burned", "calories_burned"];
const INSTRUCTOR: &[&str] = &["Instructor Name", "instructor_name"];
const CLASS_TS: &[&str] = &["Class Timestamp", "class_timestamp"];
const WORKOUT_TS: &[&str] = &["Workout Timestamp", "workout_timestamp"];
const AVG_WATTS: &[&str] = &["Avg. Watts", "avg_watts"];
const AVG_RESISTANCE: &[&str] = &["Avg. Resistance", "avg_resistance"];
const AVG_CADENCE: &[&str] = &["Avg. Cadence (RPM)", "avg_cadence"];
const AVG_SPEED: &[&str] = &["Avg. Speed (kph)", "avg_speed"];
const AVG_HEARTRATE: &[&str] = &["Avg. Heartrate", "avg_heartrate"];

/// Én rå rad slik inntakssamarbeidspartneren leverer den:
/// streng-nøklet mapping uten garantier om feltnavn eller typer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawRow(pub BTreeMap<String, FlexValue>);

impl RawRow {
    /// CSV-formede rader (alle felt som tekst), brukt av inntak via csv.
    pub fn from_text_fields(fields: BTreeMap<String, String>) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(k, v)| (k, FlexValue::Text(v)))
                .collect(),
        )
    }

    /// Første tilstedeværende og "truthy" alias vinner.
    fn first(&self, aliases: &[&str]) -> Option<&FlexValue> {
        aliases
            .iter()
            .find_map(|k| self.0.get(*k).filter(|v| v.is_truthy()))
    }

    fn text(&self, aliases: &[&str]) -> Option<String> {
        self.first(aliases).and_then(FlexValue::as_text)
    }

    fn num(&self, aliases: &[&str]) -> Option<f64> {
        self.first(aliases).and_then(FlexValue::as_f64)
    }

    fn int(&self, aliases: &[&str]) -> Option<u32> {
        self.first(aliases).and_then(FlexValue::as_u32)
    }
}

/// Én tolket treningsrad. Uforanderlig etter konstruksjon; normaliserte
/// instants beregnes én gang her og gjenbrukes av all tidslogikk.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub discipline: Option<String>,
    pub title: Option<String>,
    pub kind: Option<String>,
    pub instructor: Option<String>,
    pub duration_min: Option<u32>,
    pub output_kj: Option<f64>,
    pub distance_km: Option<f64>,
    pub calories: Option<f64>,
    pub avg_watts: Option<String>,
    pub avg_resistance: Option<String>,
    pub avg_cadence: Option<String>,
    pub avg_speed: Option<String>,
    pub avg_heartrate: Option<String>,
    pub class_timestamp: Option<String>,
    pub workout_timestamp: Option<String>,
    pub class_instant: Option<DateTime<FixedOffset>>,
    pub workout_instant: Option<DateTime<FixedOffset>>,
}

impl WorkoutRecord {
    pub fn from_raw(raw: &RawRow) -> Self {
        let class_timestamp = raw.text(CLASS_TS);
        let workout_timestamp = raw.text(WORKOUT_TS);
        let class_instant = normalize_logged(class_timestamp.as_deref());
        let workout_instant = normalize_logged(workout_timestamp.as_deref());

        Self {
            discipline: raw.text(DISCIPLINE),
            title: raw.text(TITLE),
            kind: raw.text(KIND),
            instructor: raw.text(INSTRUCTOR),
            duration_min: raw.int(LENGTH_MIN),
            output_kj: raw.num(TOTAL_OUTPUT),
            distance_km: raw.num(DISTANCE_KM),
            calories: raw.num(CALORIES),
            avg_watts: raw.text(AVG_WATTS),
            avg_resistance: raw.text(AVG_RESISTANCE),
            avg_cadence: raw.text(AVG_CADENCE),
            avg_speed: raw.text(AVG_SPEED),
            avg_heartrate: raw.text(AVG_HEARTRATE),
            class_timestamp,
            workout_timestamp,
            class_instant,
            workout_instant,
        }
    }
}

fn normalize_logged(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let raw = raw?;
    let instant = dates::normalize(raw);
    if instant.is_none() {
        log::debug!("klarte ikke å tolke tidsstempel, hopper over: {raw:?}");
    }
    instant
}

/// Tolker hele batchen. Rader som mangler alt blir stående som tomme
/// records og lukes ut av filtrene nedstrøms.
pub fn parse_rows(rows: &[RawRow]) -> Vec<WorkoutRecord> {
    rows.iter().map(WorkoutRecord::from_raw).collect()
}
