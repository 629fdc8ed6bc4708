// core/src/filter.rs
use crate::models::WorkoutRecord;
use crate::types::Cfg;

/// Rader som i det hele tatt teller: krever et ikke-tomt treningstidsstempel.
/// (Tomme CSV-haler og halvskrevne rader faller her.)
pub fn filter_valid(records: &[WorkoutRecord]) -> Vec<&WorkoutRecord> {
    records
        .iter()
        .filter(|r| r.workout_timestamp.is_some())
        .collect()
}

/// Disiplinmatch: eksakt som standard, substring-tolerant (case-insensitivt)
/// når konfigurasjonen ber om det.
pub fn matches_discipline(record: &WorkoutRecord, cfg: &Cfg) -> bool {
    let Some(discipline) = record.discipline.as_deref() else {
        return false;
    };
    let target = cfg.discipline();
    if cfg.discipline_substring_match() {
        discipline.to_lowercase().contains(&target.to_lowercase())
    } else {
        discipline == target
    }
}

pub fn filter_by_discipline<'a>(records: &'a [WorkoutRecord], cfg: &Cfg) -> Vec<&'a WorkoutRecord> {
    records.iter().filter(|r| matches_discipline(r, cfg)).collect()
}

/// PR-kvalifisering: riktig disiplin, varighet > 0, output > 0, og verken
/// type- eller tittelfeltet markerer en fri økt ("Just Ride"-varianter).
pub fn is_pr_eligible(record: &WorkoutRecord, cfg: &Cfg) -> bool {
    if !matches_discipline(record, cfg) {
        return false;
    }

    if record.duration_min.map_or(true, |d| d == 0) {
        return false;
    }
    if record.output_kj.map_or(true, |o| o <= 0.0) {
        return false;
    }

    let kind = record.kind.as_deref().unwrap_or("").to_lowercase();
    let title = record.title.as_deref().unwrap_or("").to_lowercase();
    if kind.contains(&cfg.freeform_kind_marker().to_lowercase())
        || title.contains(&cfg.freeform_title_marker().to_lowercase())
    {
        return false;
    }

    true
}

pub fn filter_eligible<'a>(records: &'a [WorkoutRecord], cfg: &Cfg) -> Vec<&'a WorkoutRecord> {
    let eligible: Vec<&WorkoutRecord> =
        records.iter().filter(|r| is_pr_eligible(r, cfg)).collect();
    log::debug!(
        "{} av {} rader kvalifiserer for PR-beregning",
        eligible.len(),
        records.len()
    );
    eligible
}

/// De to rittvariantene av samme disiplin. En rad er alternate når
/// tittelen inneholder markøren (case-insensitivt), ellers primary.
#[derive(Debug, Default)]
pub struct VariantSplit<'a> {
    pub regular: Vec<&'a WorkoutRecord>,
    pub lanebreak: Vec<&'a WorkoutRecord>,
}

pub fn partition_variants<'a>(records: &[&'a WorkoutRecord], marker: &str) -> VariantSplit<'a> {
    let marker = marker.to_lowercase();
    let mut split = VariantSplit::default();
    for &r in records {
        let themed = r
            .title
            .as_deref()
            .map_or(false, |t| t.to_lowercase().contains(&marker));
        if themed {
            split.lanebreak.push(r);
        } else {
            split.regular.push(r);
        }
    }
    split
}
