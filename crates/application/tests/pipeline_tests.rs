//! Tests running CSV text through the loaders and into the engine
//!
//! Cells read from files stay text, so numeric-looking categorical labels
//! and zero-padded test codes must survive the trip unchanged.

use athlete_insights_application::ClassificationEngine;
use athlete_insights_domain::{record::TIER_NUMBER, CellValue, Tier};
use athlete_insights_infrastructure::{read_catalog, read_records, read_sports};

const CATALOG: &str = "Code,Test Name,Scoring Type,Tier 1,Tier 2,Tier 3,Tier 4\n\
    SPR10,10 Yard Sprint,Tiered,<=1.50,<=1.55,<=1.60,>1.60\n\
    OHS,Overhead Squat,Movement Quality,3,2,1,0\n\
    007,Balance Reach,Calculated,Pain,Balanced,Outside Ideal,No Limitation\n";

const SPORTS: &str = "Name\nSoccer\nHockey\n";

const RECORDS: &str = "Athlete Name,Test Date,Sport,Test Name,Test Code,Value\n\
    Ana,2024-03-01,Soccer,Overhead Squat,OHS,3\n\
    Ben,2024-03-01,Hockey,Overhead Squat,OHS,0\n\
    Cal,2024-03-02,Soccer,Balance Reach,007,balanced\n\
    Dee,2024-03-02,Hockey,10 Yard Sprint,SPR10,1.52\n";

fn engine() -> ClassificationEngine {
    ClassificationEngine::builder()
        .catalog(read_catalog(CATALOG.as_bytes()).unwrap())
        .sports(read_sports(SPORTS.as_bytes()).unwrap())
        .build()
}

#[test]
fn test_numeric_movement_labels_classify_after_loading() {
    // Arrange
    let engine = engine();
    let batch = read_records(RECORDS.as_bytes()).unwrap();

    // Act
    let first = engine.classify("OHS", batch.cell(0, "Value").unwrap());
    let second = engine.classify("OHS", batch.cell(1, "Value").unwrap());

    // Assert
    assert_eq!(first.tier(), Some(Tier::One));
    assert_eq!(first.rank(), Some(3));
    assert_eq!(second.tier(), Some(Tier::Four));
}

#[test]
fn test_zero_padded_codes_validate_after_loading() {
    let engine = engine();
    let batch = read_records(RECORDS.as_bytes()).unwrap();

    let report = engine.validate(&batch);

    assert!(report.passed, "unexpected errors: {:?}", report.errors);
    assert!(report.errors.is_empty());
}

#[test]
fn test_loaded_batch_annotates_every_row() {
    let engine = engine();
    let batch = read_records(RECORDS.as_bytes()).unwrap();

    let (annotated, _) = engine.validate_and_annotate(&batch).unwrap();

    let tiers: Vec<_> = (0..annotated.len())
        .map(|row| annotated.cell(row, TIER_NUMBER).cloned())
        .collect();
    assert_eq!(
        tiers,
        vec![
            Some(CellValue::Integer(3)),
            Some(CellValue::Integer(0)),
            Some(CellValue::Integer(2)),
            Some(CellValue::Integer(2)),
        ]
    );
}

#[test]
fn test_code_seven_does_not_match_zero_padded_catalog_code() {
    let engine = engine();
    let records = "Athlete Name,Test Date,Sport,Test Name,Test Code,Value\n\
        Ana,2024-03-01,Soccer,Balance Reach,7,balanced\n";
    let batch = read_records(records.as_bytes()).unwrap();

    let report = engine.validate(&batch);

    assert!(!report.passed);
    assert_eq!(report.errors[0].message, "Invalid Test Code values: row 0 ('7')");
}
