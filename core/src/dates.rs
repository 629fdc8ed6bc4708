// core/src/dates.rs
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Gjenkjent sone-suffiks: navngitt forkortelse `(EST)` eller signert
/// to-sifret offset `(-05)`. Alt annet blir stående og feiler i datoparsingen.
static ZONE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<rest>.*\S)\s*\((?P<zone>[A-Za-z]{2,5}|[+-]\d{2})\)\s*$")
        .expect("zone suffix pattern")
});

/// Normaliserer et heterogent tidsstempel til et kanonisk instant.
///
/// `YYYY-MM-DD HH:MM[:SS]`, valgfritt etterfulgt av sone-annotasjon.
/// Signert offset (`(-05)`) tolkes som `±HH:00`; navngitte forkortelser
/// bærer ingen offsetinformasjon og strippes kun – begge deler samme
/// oppførsel som kildedataene er skrevet for. Ugyldig input gir None,
/// aldri feil.
pub fn normalize(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let utc = FixedOffset::east_opt(0)?;
    let (rest, offset) = match ZONE_SUFFIX.captures(trimmed) {
        Some(caps) => {
            let zone = caps.name("zone")?.as_str();
            let rest = caps.name("rest")?.as_str();
            if zone.starts_with('+') || zone.starts_with('-') {
                let hours: i32 = zone.parse().ok()?;
                (rest, FixedOffset::east_opt(hours * 3600)?)
            } else {
                // Navngitt sone: strippes uten å påvirke offset.
                (rest, utc)
            }
        }
        None => (trimmed, utc),
    };

    let naive = parse_wall_clock(rest)?;
    naive.and_local_timezone(offset).single()
}

/// Veggklokke med eller uten sekunder.
fn parse_wall_clock(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_pattern_matches_named_and_offset_forms() {
        assert!(ZONE_SUFFIX.is_match("2023-01-15 10:30 (EST)"));
        assert!(ZONE_SUFFIX.is_match("2023-01-15 10:30 (-05)"));
        assert!(ZONE_SUFFIX.is_match("2023-01-15 10:30 (+11)"));
        // ukjent haleinnhold skal IKKE gjenkjennes
        assert!(!ZONE_SUFFIX.is_match("2023-01-15 10:30 (XYZ123)"));
        assert!(!ZONE_SUFFIX.is_match("2023-01-15 10:30 (Z)"));
    }

    #[test]
    fn wall_clock_accepts_with_and_without_seconds() {
        assert!(parse_wall_clock("2023-01-15 10:30").is_some());
        assert!(parse_wall_clock("2023-01-15 10:30:45").is_some());
        assert!(parse_wall_clock("15.01.2023 10:30").is_none());
    }
}
