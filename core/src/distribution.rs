// core/src/distribution.rs
use std::collections::{BTreeMap, HashMap};

use crate::models::WorkoutRecord;
use crate::types::Distribution;

/// Teller forekomster per etikett i første-forekomst-rekkefølge.
/// Nøkkelfunksjonen avgjør selv om manglende verdier skal bli "Unknown"
/// (disiplin/instruktør) eller hoppes over (None).
pub fn count_by<T, F>(items: &[T], mut key_fn: F) -> Distribution
where
    F: FnMut(&T) -> Option<String>,
{
    let mut order: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let Some(label) = key_fn(item) else { continue };
        match index.get(&label) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(label.clone(), order.len());
                order.push((label, 1));
            }
        }
    }

    let (labels, counts) = order.into_iter().unzip();
    Distribution { labels, counts }
}

pub fn discipline_distribution(records: &[&WorkoutRecord]) -> Distribution {
    count_by(records, |r| {
        Some(r.discipline.clone().unwrap_or_else(|| "Unknown".to_string()))
    })
}

/// Varighetsfordeling med etiketter som "20 min", stigende etter bøtte.
/// Rader uten varighet hoppes over.
pub fn duration_distribution(records: &[&WorkoutRecord]) -> Distribution {
    let mut buckets: BTreeMap<u32, u64> = BTreeMap::new();
    for r in records {
        if let Some(min) = r.duration_min {
            *buckets.entry(min).or_insert(0) += 1;
        }
    }
    let (labels, counts) = buckets
        .into_iter()
        .map(|(min, n)| (format!("{min} min"), n))
        .unzip();
    Distribution { labels, counts }
}

/// Topp 10 instruktører etter antall økter, synkende. Likt antall
/// beholder første-forekomst-rekkefølgen (stabil sortering).
pub fn instructor_leaderboard(records: &[&WorkoutRecord]) -> Distribution {
    let counted = count_by(records, |r| {
        Some(r.instructor.clone().unwrap_or_else(|| "Unknown".to_string()))
    });

    let mut pairs: Vec<(String, u64)> = counted
        .labels
        .into_iter()
        .zip(counted.counts)
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs.truncate(10);

    let (labels, counts) = pairs.into_iter().unzip();
    Distribution { labels, counts }
}
