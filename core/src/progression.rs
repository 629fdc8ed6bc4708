// core/src/progression.rs
use std::collections::BTreeMap;

use crate::models::{fmt_num, WorkoutRecord};
use crate::types::PrEntry;

/// Varighetsbøtte (minutter) → PR-kjede, nyeste PR først.
pub type PrProgressions = BTreeMap<u32, Vec<PrEntry>>;

/// Finner PR-progresjonen per varighetsbøtte.
///
/// Innen hver bøtte sorteres radene stabilt på normalisert klassetidspunkt,
/// med utolkbare tidspunkt sist (innbyrdes rekkefølge bevart). Den
/// kronologiske vandringen holder et løpende maksimum fra 0; bare strengt
/// høyere output gir en ny oppføring, likhet gjør det aldri. Kjeden snus
/// til slutt slik at nyeste PR ligger først.
pub fn pr_progressions(records: &[&WorkoutRecord]) -> PrProgressions {
    let mut buckets: BTreeMap<u32, Vec<&WorkoutRecord>> = BTreeMap::new();
    for &r in records {
        // Forutsetter kvalifiserte rader, men vakten holder funksjonen total.
        let (Some(min), Some(out)) = (r.duration_min, r.output_kj) else {
            continue;
        };
        if min == 0 || out <= 0.0 {
            continue;
        }
        buckets.entry(min).or_default().push(r);
    }

    let mut progressions = PrProgressions::new();
    for (min, mut rows) in buckets {
        rows.sort_by_key(|r| (r.class_instant.is_none(), r.class_instant));

        let mut best = 0.0_f64;
        let mut chain: Vec<PrEntry> = Vec::new();
        for r in rows {
            let output = r.output_kj.unwrap_or(0.0);
            if output > best {
                chain.push(pr_entry(min, output, r));
                best = output;
            }
        }
        chain.reverse();
        progressions.insert(min, chain);
    }
    progressions
}

fn pr_entry(length_min: u32, output_kj: f64, r: &WorkoutRecord) -> PrEntry {
    PrEntry {
        length_min,
        output_kj,
        class_timestamp: r.class_timestamp.clone(),
        workout_timestamp: r.workout_timestamp.clone(),
        class_instant: r.class_instant,
        instructor: r
            .instructor
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        kind: r.kind.clone(),
        avg_watts: r.avg_watts.clone(),
        avg_resistance: r.avg_resistance.clone(),
        avg_cadence: r.avg_cadence.clone(),
        avg_speed: r.avg_speed.clone(),
        distance_km: r.distance_km.map(fmt_num),
        calories: r.calories.map(fmt_num),
        avg_heartrate: r.avg_heartrate.clone(),
    }
}

/// Ett oppslag i en PR-kjede, med nok kontekst til et visningskort.
#[derive(Debug, Clone, PartialEq)]
pub struct PrSelection<'a> {
    pub entry: &'a PrEntry,
    pub index: usize,
    pub total: usize,
    /// Differansen opp til neste (nyere) PR. None betyr siste PR.
    pub beaten_by: Option<f64>,
}

/// Ren navigasjonsspørring: variant- og varighetsvalg samt indeks kommer
/// fra kalleren i stedet for modulglobal fanetilstand.
pub fn select_pr(prs: &PrProgressions, duration_min: u32, index: usize) -> Option<PrSelection<'_>> {
    let chain = prs.get(&duration_min)?;
    let entry = chain.get(index)?;
    let beaten_by = if index > 0 {
        Some(chain[index - 1].output_kj - entry.output_kj)
    } else {
        None
    };
    Some(PrSelection {
        entry,
        index,
        total: chain.len(),
        beaten_by,
    })
}
