// core/tests/test_dates.rs
use chrono::DateTime;

use ridegraph_core::dates::normalize;

#[test]
fn signed_offset_form_round_trips_to_exact_instant() {
    // Arrange: kanonisk signert-offset-form
    let raw = "2023-01-15 10:30 (-05)";

    // Act
    let instant = normalize(raw).expect("signed offset form should parse");

    // Assert: håndregnet instant
    let expected = DateTime::parse_from_rfc3339("2023-01-15T10:30:00-05:00").unwrap();
    assert_eq!(instant, expected, "offset mismatch for {raw}");
}

#[test]
fn positive_offset_is_honored_too() {
    let instant = normalize("2023-06-01 08:15 (+11)").expect("should parse");
    let expected = DateTime::parse_from_rfc3339("2023-06-01T08:15:00+11:00").unwrap();
    assert_eq!(instant, expected);
}

#[test]
fn named_abbreviation_is_stripped_without_offset() {
    // (EST) bærer ingen offsetinformasjon – parses som veggklokke på +00:00
    let instant = normalize("2023-01-15 10:30 (EST)").expect("named form should parse");
    let expected = DateTime::parse_from_rfc3339("2023-01-15T10:30:00+00:00").unwrap();
    assert_eq!(instant, expected);
}

#[test]
fn named_and_offset_forms_of_same_wall_clock_diverge() {
    // Dokumentert inkonsistens, bevart med vilje: samme veggklokke,
    // to annotasjonsstiler, to ulike instants.
    let named = normalize("2023-01-15 10:30 (EST)").unwrap();
    let offset = normalize("2023-01-15 10:30 (-05)").unwrap();
    assert_ne!(
        named, offset,
        "named abbreviations are strip-only, the signed form is honored"
    );
}

#[test]
fn seconds_are_optional() {
    let without = normalize("2023-01-15 10:30").unwrap();
    let with = normalize("2023-01-15 10:30:00").unwrap();
    assert_eq!(without, with);

    let nonzero = normalize("2023-01-15 10:30:45 (UTC)").unwrap();
    let expected = DateTime::parse_from_rfc3339("2023-01-15T10:30:45+00:00").unwrap();
    assert_eq!(nonzero, expected);
}

#[test]
fn invalid_input_yields_none_never_panics() {
    // Tomt, søppel, ukjent haleinnhold og umulige datoer
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("   "), None);
    assert_eq!(normalize("ikke en dato"), None);
    assert_eq!(normalize("2023-01-15 10:30 (XYZ123)"), None, "unknown tail stays and fails");
    assert_eq!(normalize("2023-13-40 99:99"), None);
    assert_eq!(normalize("15.01.2023 10:30"), None);
}
