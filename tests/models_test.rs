use std::str::FromStr;

use openkcal::models::profile::{ActivityLevel, Height, Sex, UnitSystem};

// ── enum parsing ─────────────────────────────────────────────────────────────

#[test]
fn test_sex_parse_and_display() {
    assert_eq!(Sex::from_str("male").unwrap(), Sex::Male);
    assert_eq!(Sex::from_str("F").unwrap(), Sex::Female);
    assert_eq!(Sex::Female.to_string(), "female");
    assert!(Sex::from_str("other").is_err());
}

#[test]
fn test_unit_system_parse_and_display() {
    assert_eq!(UnitSystem::from_str("metric").unwrap(), UnitSystem::Metric);
    assert_eq!(
        UnitSystem::from_str("Imperial").unwrap(),
        UnitSystem::Imperial
    );
    assert!(UnitSystem::from_str("stone").is_err());
    assert_eq!(UnitSystem::Imperial.to_string(), "imperial");
}

#[test]
fn test_activity_level_round_trips_through_labels() {
    for level in [
        ActivityLevel::Sedentary,
        ActivityLevel::SlightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ] {
        let parsed = ActivityLevel::from_str(&level.to_string()).unwrap();
        assert_eq!(parsed, level);
    }
}

// ── strict height parsing ────────────────────────────────────────────────────

#[test]
fn test_height_parse_metric() {
    let h = Height::parse("178", UnitSystem::Metric).unwrap();
    assert_eq!(h, Height::Metric { cm: 178.0 });
    assert_eq!(h.centimeters(), 178.0);
    assert_eq!(h.to_raw(), "178");
}

#[test]
fn test_height_parse_metric_rejects_garbage() {
    assert!(Height::parse("tall", UnitSystem::Metric).is_err());
    assert!(Height::parse("-170", UnitSystem::Metric).is_err());
    assert!(Height::parse("0", UnitSystem::Metric).is_err());
}

#[test]
fn test_height_parse_imperial() {
    let h = Height::parse("5'10", UnitSystem::Imperial).unwrap();
    assert_eq!(h, Height::Imperial { feet: 5, inches: 10 });
    assert!((h.centimeters() - 177.8).abs() < 1e-9);
    assert_eq!(h.to_raw(), "5'10");
}

#[test]
fn test_height_parse_imperial_inches_optional() {
    let h = Height::parse("6'", UnitSystem::Imperial).unwrap();
    assert_eq!(h, Height::Imperial { feet: 6, inches: 0 });
}

#[test]
fn test_height_parse_imperial_allows_up_to_two_inch_digits() {
    // App convention: inches run 0-99 and are not carried into feet
    let h = Height::parse("5'15", UnitSystem::Imperial).unwrap();
    assert_eq!(h, Height::Imperial { feet: 5, inches: 15 });
}

#[test]
fn test_height_parse_imperial_rejects_malformed() {
    assert!(Height::parse("5 10", UnitSystem::Imperial).is_err());
    assert!(Height::parse("five'ten", UnitSystem::Imperial).is_err());
    assert!(Height::parse("5'123", UnitSystem::Imperial).is_err());
    assert!(Height::parse("", UnitSystem::Imperial).is_err());
}
