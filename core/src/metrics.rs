// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Tellerne for pipeline-observasjon. Kun monotone countere; de er ikke
/// del av analysetilstanden og påvirker aldri resultatet.
pub struct Metrics {
    pub registry: Registry,
    rows_total: IntCounter,
    rows_missing_timestamp_total: IntCounter,
    bad_timestamp_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let rows_total = counter(
            &registry,
            "ridegraph_rows_total",
            "Rader mottatt for analyse",
        );
        let rows_missing_timestamp_total = counter(
            &registry,
            "ridegraph_rows_missing_timestamp_total",
            "Rader uten treningstidsstempel",
        );
        let bad_timestamp_total = counter(
            &registry,
            "ridegraph_bad_timestamp_total",
            "Gyldige rader med utolkbart tidsstempel",
        );
        Self {
            registry,
            rows_total,
            rows_missing_timestamp_total,
            bad_timestamp_total,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

// Navn og registrering er statiske; feiler bare ved programmeringsfeil.
fn counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    let c = IntCounter::new(name, help).expect("gyldig counter-navn");
    registry
        .register(Box::new(c.clone()))
        .expect("unik counter-registrering");
    c
}

static DEFAULT: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn default_metrics() -> &'static Metrics {
    &DEFAULT
}

pub fn rows_total(metrics: &Metrics) -> &IntCounter {
    &metrics.rows_total
}

pub fn rows_missing_timestamp_total(metrics: &Metrics) -> &IntCounter {
    &metrics.rows_missing_timestamp_total
}

pub fn bad_timestamp_total(metrics: &Metrics) -> &IntCounter {
    &metrics.bad_timestamp_total
}
