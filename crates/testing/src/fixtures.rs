//! Test fixtures for reference data and record batches.
//!
//! The catalog below mirrors the shapes seen in real catalogs: a descending
//! sprint test, an ascending jump test, a movement-quality screen and a
//! calculated balance score.

use athlete_insights_domain::{
    catalog::{ScoringKind, TestCatalog, TestCatalogEntry},
    record::{AthleteRecord, RecordBatch},
    sports::SportsList,
    value::CellValue,
};
use chrono::{Duration, NaiveDate};
use fake::{faker::name::en::Name, Fake};

/// 10 yard sprint, lower is better
pub fn sprint_entry() -> TestCatalogEntry {
    TestCatalogEntry::new("SPR10", "10 Yard Sprint", ScoringKind::Tiered).with_conditions([
        Some("<=1.50"),
        Some("<=1.55"),
        Some("<=1.60"),
        Some(">1.60"),
    ])
}

/// Countermovement jump, higher is better
pub fn jump_entry() -> TestCatalogEntry {
    TestCatalogEntry::new("CMJ", "Countermovement Jump", ScoringKind::Tiered).with_conditions([
        Some(">=29"),
        Some(">=27"),
        Some(">=25"),
        Some("<25"),
    ])
}

pub fn squat_entry() -> TestCatalogEntry {
    TestCatalogEntry::new("OHS", "Overhead Squat", ScoringKind::MovementQuality).with_conditions([
        Some("Optimal"),
        Some("Acceptable"),
        Some("Compensation"),
        Some("Pain"),
    ])
}

pub fn hip_balance_entry() -> TestCatalogEntry {
    TestCatalogEntry::new("HIPB", "Hip Balance", ScoringKind::Calculated).with_conditions([
        Some("Pain"),
        Some("Balanced"),
        Some("Outside Ideal"),
        Some("No Limitation"),
    ])
}

/// Catalog holding the four entries above
pub fn create_test_catalog() -> TestCatalog {
    TestCatalog::from_entries(vec![sprint_entry(), jump_entry(), squat_entry(), hip_balance_entry()])
}

pub fn create_test_sports() -> SportsList {
    SportsList::new(vec!["Baseball", "Hockey", "Soccer", "Track (Sprints)"])
}

/// Random athlete name
pub fn athlete_name() -> String {
    Name().fake()
}

/// Random test date in 2024, ISO formatted
pub fn test_date() -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let offset: i64 = (0..365).fake();
    (start + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

/// A record for `entry` with a random athlete
pub fn create_test_record(entry: &TestCatalogEntry, sport: &str, value: impl Into<CellValue>) -> AthleteRecord {
    AthleteRecord {
        athlete_name: athlete_name(),
        test_date: test_date(),
        sport: sport.to_string(),
        test_name: entry.name.clone(),
        test_code: entry.code.clone(),
        value: value.into(),
    }
}

/// A clean batch touching every scoring kind
pub fn create_test_batch() -> RecordBatch {
    RecordBatch::from_records(vec![
        create_test_record(&sprint_entry(), "Soccer", 1.48),
        create_test_record(&jump_entry(), "Hockey", 27.5),
        create_test_record(&squat_entry(), "Baseball", "acceptable"),
        create_test_record(&hip_balance_entry(), "Soccer", "Balanced"),
    ])
}
