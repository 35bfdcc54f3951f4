//! Tests for tier classification, annotation and score bucketing
//!
//! Covers slot precedence, categorical matching, annotation idempotence and
//! half-open bucket boundaries.

use athlete_insights_application::{annotate, ClassificationEngine, ScoreBucketer, TierClassifier};
use athlete_insights_domain::{
    record::{TEST_CODE, TIER_NUMBER},
    thresholds::{QualityLabel, ThresholdBucket, ThresholdTable},
    Classification, CellValue, MissReason, Tier,
};
use athlete_insights_testing::{fixtures::*, strategies, CatalogEntryBuilder, RecordBatchBuilder};
use proptest::prelude::*;

#[test]
fn test_sprint_precedence() {
    // Arrange
    let catalog = create_test_catalog();
    let tier = |v: f64| TierClassifier::classify(&catalog, "SPR10", &CellValue::Number(v)).tier();

    // Assert
    assert_eq!(tier(1.48), Some(Tier::One));
    assert_eq!(tier(1.52), Some(Tier::Two));
    assert_eq!(tier(1.58), Some(Tier::Three));
    assert_eq!(tier(1.70), Some(Tier::Four));
    assert_eq!(tier(f64::NAN), None);
}

#[test]
fn test_calculated_labels_ignore_case() {
    let catalog = create_test_catalog();
    let classify = |v: &str| TierClassifier::classify(&catalog, "HIPB", &CellValue::from(v));

    assert_eq!(classify("balanced").tier(), Some(Tier::Two));
    assert_eq!(classify("PAIN").tier(), Some(Tier::One));
    assert_eq!(classify("unknown-label").tier(), None);
}

#[test]
fn test_tier_encodings_come_from_one_place() {
    let catalog = create_test_catalog();
    let result = TierClassifier::classify(&catalog, "CMJ", &CellValue::Number(27.5));

    assert_eq!(result.label(), Some("Tier 2"));
    assert_eq!(result.rank(), Some(2));
    assert_eq!(
        serde_json::to_value(result).unwrap(),
        serde_json::json!({"outcome": "matched", "detail": "Tier 2"})
    );
}

#[test]
fn test_unknown_code_and_no_match_render_the_same() {
    let catalog = create_test_catalog();
    let unknown = TierClassifier::classify(&catalog, "ZZZ", &CellValue::Number(1.4));
    let squat_number = TierClassifier::classify(&catalog, "OHS", &CellValue::Number(1.4));

    assert_eq!(unknown.rank(), None);
    assert_eq!(squat_number.rank(), None);
    assert_eq!(unknown, Classification::Miss(MissReason::UnknownTestCode));
    assert_eq!(squat_number, Classification::Miss(MissReason::ValueTypeMismatch));
}

#[test]
fn test_codes_with_whitespace_resolve() {
    let catalog = create_test_catalog();
    let result = TierClassifier::classify(&catalog, " SPR10 ", &CellValue::from("1.49"));
    assert_eq!(result.tier(), Some(Tier::One));
}

#[test]
fn test_annotate_fixture_batch() {
    // Arrange
    let catalog = create_test_catalog();
    let batch = create_test_batch();

    // Act
    let annotated = annotate(&batch, &catalog);

    // Assert
    let code_index = annotated.column_index(TEST_CODE).unwrap();
    assert_eq!(annotated.column_index(TIER_NUMBER), Some(code_index + 1));
    let tiers: Vec<_> = annotated
        .column_values(TIER_NUMBER)
        .unwrap()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(
        tiers,
        vec![
            CellValue::Integer(3),
            CellValue::Integer(2),
            CellValue::Integer(2),
            CellValue::Integer(2),
        ]
    );
}

#[test]
fn test_catalog_edits_reclassify_history() {
    let batch = RecordBatchBuilder::new().with_row("Soccer", "PRO", 4.3).build();
    let strict = CatalogEntryBuilder::new("PRO").tier(1, "<4.2").tier(2, "<4.4").build();
    let lenient = CatalogEntryBuilder::new("PRO").tier(1, "<4.5").build();

    let first = annotate(&batch, &athlete_insights_domain::TestCatalog::from_entries(vec![strict]));
    let second = annotate(&first, &athlete_insights_domain::TestCatalog::from_entries(vec![lenient]));

    assert_eq!(first.cell(0, TIER_NUMBER), Some(&CellValue::Integer(2)));
    assert_eq!(second.cell(0, TIER_NUMBER), Some(&CellValue::Integer(3)));
}

#[test]
fn test_bucket_half_open_boundaries() {
    let table = ThresholdTable::from_buckets(vec![
        ThresholdBucket::new("Jump", QualityLabel::Poor, 0.0, 25.0),
        ThresholdBucket::new("Jump", QualityLabel::Fair, 25.0, 27.0),
        ThresholdBucket::new("Jump", QualityLabel::Good, 27.0, 29.0),
        ThresholdBucket::new("Jump", QualityLabel::Excellent, 29.0, f64::INFINITY),
    ]);
    let bucketer = ScoreBucketer::with_table(table);

    assert_eq!(bucketer.bucket("Jump", 25.0), Some(QualityLabel::Fair));
    assert_eq!(bucketer.bucket("Jump", 29.0), Some(QualityLabel::Excellent));
    assert_eq!(bucketer.label_for("Jump", &CellValue::from("tall")), "Unknown");
}

#[test]
fn test_engine_scores_wide_table() {
    let batch = RecordBatchBuilder::new()
        .with_row("Soccer", "SPR10", 1.5)
        .with_column("5-Jump RSI", 2.15)
        .with_column("Fly-10 (s)", CellValue::Null)
        .build();

    let scored = ClassificationEngine::default().score(&batch);

    assert_eq!(scored.cell(0, "5-Jump RSI_Score"), Some(&CellValue::from("Good")));
    assert_eq!(scored.cell(0, "Fly-10 (s)_Score"), Some(&CellValue::from("Unknown")));
    assert!(!scored.has_column("CMJ (in)_Score"));
}

proptest! {
    #[test]
    fn test_annotate_idempotent(batch in strategies::record_batch(40)) {
        let catalog = create_test_catalog();
        let once = annotate(&batch, &catalog);
        let twice = annotate(&once, &catalog);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_annotate_preserves_rows_and_adds_one_column(batch in strategies::record_batch(40)) {
        let annotated = annotate(&batch, &create_test_catalog());
        prop_assert_eq!(annotated.len(), batch.len());
        prop_assert_eq!(annotated.columns().len(), batch.columns().len() + 1);
        prop_assert_eq!(annotated.without_column(TIER_NUMBER), batch);
    }

    #[test]
    fn test_parallel_annotation_matches_sequential(batch in strategies::record_batch(60)) {
        let catalog = create_test_catalog();
        let parallel = ClassificationEngine::builder()
            .catalog(catalog.clone())
            .parallel_row_threshold(1)
            .build()
            .annotate(&batch);
        prop_assert_eq!(parallel, annotate(&batch, &catalog));
    }

    #[test]
    fn test_first_matching_slot_wins(value in -50.0f64..50.0) {
        let entry = CatalogEntryBuilder::new("T")
            .tier(1, ">=10")
            .tier(2, ">=0")
            .tier(3, ">=-10")
            .tier(4, "<-10")
            .build();
        let expected = if value >= 10.0 {
            Tier::One
        } else if value >= 0.0 {
            Tier::Two
        } else if value >= -10.0 {
            Tier::Three
        } else {
            Tier::Four
        };
        prop_assert_eq!(
            TierClassifier::classify_entry(&entry, &CellValue::Number(value)).tier(),
            Some(expected)
        );
    }
}
