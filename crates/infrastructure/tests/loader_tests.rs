//! Tests for CSV loaders and writers over real files

use athlete_insights_domain::{
    catalog::ScoringKind, sports::SportsList, thresholds::ThresholdTable, CellValue, Tier,
};
use athlete_insights_infrastructure::{
    load_catalog, load_records, load_sports, load_thresholds, write_records, write_sports,
    write_thresholds, LoadError, ReferenceData,
};
use athlete_insights_testing::fixtures::create_test_batch;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_reference_files_are_unavailable() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("nope.csv");

    assert!(!load_catalog(&absent).unwrap().is_loaded());
    assert!(!load_thresholds(&absent).unwrap().is_loaded());
    let sports = load_sports(&absent).unwrap();
    assert!(sports.reason().unwrap().contains("nope.csv"));
}

#[test]
fn test_malformed_reference_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.csv", "Code,Name\nSPR10,Sprint\n");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, LoadError::ReferenceData(_)));
}

#[test]
fn test_load_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "catalog.csv",
        " Code , Test Name ,Scoring Type,Tier 1,Tier 2,Tier 3,Tier 4,Description\n\
         PRO,Pro Agility,Tiered,<4.20,<4.40,<4.60,>=4.60,5-10-5 shuttle\n\
         OHS,Overhead Squat,movement_quality,Optimal,Acceptable,Compensation,Pain,\n",
    );

    let catalog = match load_catalog(&path).unwrap() {
        ReferenceData::Loaded(catalog) => catalog,
        other => panic!("expected catalog, got {}", other),
    };

    assert_eq!(catalog.codes().collect::<Vec<_>>(), vec!["PRO", "OHS"]);
    assert_eq!(catalog.get("OHS").unwrap().scoring_kind, ScoringKind::MovementQuality);
    assert_eq!(catalog.get("PRO").unwrap().condition(Tier::Four), Some(">=4.60"));
}

#[test]
fn test_thresholds_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("thresholds.csv");

    write_thresholds(&path, &ThresholdTable::defaults()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("∞"));

    let loaded = load_thresholds(&path).unwrap().into_option().unwrap();
    assert_eq!(loaded, ThresholdTable::defaults());
}

#[test]
fn test_sports_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sports.csv");
    let sports = SportsList::normalized(vec!["Soccer", "Baseball", "Soccer"]).unwrap();

    write_sports(&path, &sports).unwrap();

    assert_eq!(load_sports(&path).unwrap(), ReferenceData::Loaded(sports));
}

#[test]
fn test_records_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.csv");
    let batch = create_test_batch();

    write_records(&path, &batch).unwrap();
    let loaded = load_records(&path).unwrap();

    assert_eq!(loaded.columns(), batch.columns());
    assert_eq!(loaded.len(), batch.len());
    assert_eq!(loaded.cell(0, "Value"), Some(&CellValue::from("1.48")));
    assert_eq!(loaded.cell(2, "Value"), Some(&CellValue::from("acceptable")));
}

#[test]
fn test_load_records_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_records(&dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("absent.csv"));
}
