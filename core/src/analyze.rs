// core/src/analyze.rs
use crate::distribution::{discipline_distribution, duration_distribution, instructor_leaderboard};
use crate::filter::{filter_eligible, filter_valid, partition_variants};
use crate::metrics::{bad_timestamp_total, default_metrics, rows_missing_timestamp_total, rows_total};
use crate::models::{parse_rows, IngestError, RawRow};
use crate::progression::pr_progressions;
use crate::streaks::{favorite_day_of_week, longest_streak, Policy};
use crate::summary::{fun_stats, summarize};
use crate::types::{Cfg, HistoryReport, StreakReport};

/// Kjører hele analysen over én batch rader.
///
/// Fordelinger og streaks regnes over alle gyldige rader; PR-kjedene,
/// totalene og de avledede sammenligningene over det disiplin-avgrensede
/// kvalifiserte settet, delt i de to rittvariantene. Ren funksjon av
/// input: samme batch gir identisk rapport, og en tom eller uforståelig
/// batch gir null/tom-rapporten i stedet for feil.
pub fn analyze_history(rows: &[RawRow], cfg: Option<Cfg>) -> HistoryReport {
    let cfg = cfg.unwrap_or_default();
    let metrics = default_metrics();

    let records = parse_rows(rows);
    rows_total(metrics).inc_by(records.len() as u64);

    let valid = filter_valid(&records);
    rows_missing_timestamp_total(metrics).inc_by((records.len() - valid.len()) as u64);
    let unparseable = valid.iter().filter(|r| r.workout_instant.is_none()).count();
    bad_timestamp_total(metrics).inc_by(unparseable as u64);
    if !records.is_empty() && valid.is_empty() {
        log::warn!(
            "ingen av {} rader hadde treningstidsstempel; rapporten blir tom",
            records.len()
        );
    }

    let streaks = StreakReport {
        strict: longest_streak(&valid, Policy::Strict),
        gap_tolerant: longest_streak(&valid, Policy::GapTolerant),
        favorite_day: favorite_day_of_week(&valid, cfg.favorite_day_min_count()),
    };

    let eligible = filter_eligible(&records, &cfg);
    let split = partition_variants(&eligible, cfg.variant_marker());
    let totals = summarize(&eligible);
    let fun = fun_stats(&totals);

    HistoryReport {
        discipline_distribution: discipline_distribution(&valid),
        duration_distribution: duration_distribution(&valid),
        instructor_leaderboard: instructor_leaderboard(&valid),
        regular_prs: pr_progressions(&split.regular),
        lanebreak_prs: pr_progressions(&split.lanebreak),
        streaks,
        totals,
        fun_stats: fun,
    }
}

/// JSON-flaten mot inntakssamarbeidspartneren: en array av streng-nøklede
/// rader inn, serialisert rapport ut. Eneste feilbare overflate i kjernen;
/// feilen bærer JSON-stien til det ugyldige feltet.
pub fn analyze_history_json(rows_json: &str, cfg_json: Option<&str>) -> Result<String, IngestError> {
    let mut de = serde_json::Deserializer::from_str(rows_json);
    let rows: Vec<RawRow> = serde_path_to_error::deserialize(&mut de).map_err(IngestError::Rows)?;

    let cfg = match cfg_json {
        Some(raw) => {
            let mut de = serde_json::Deserializer::from_str(raw);
            Some(serde_path_to_error::deserialize(&mut de).map_err(IngestError::Cfg)?)
        }
        None => None,
    };

    let report = analyze_history(&rows, cfg);
    Ok(serde_json::to_string(&report)?)
}
