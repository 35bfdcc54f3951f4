//! Classification Engine - facade over the classification operations
//!
//! The engine owns the reference data a caller has loaded (catalog, sports
//! list, optional custom threshold table) and exposes classification,
//! bucketing, validation and annotation over it. Reference data that was not
//! supplied is treated as unavailable, never looked up on disk.

use crate::annotation::TierAnnotator;
use crate::scoring::{ScoreBucketer, TierClassifier};
use crate::validation::{RecordValidator, ReportExt};
use crate::{ApplicationError, ApplicationResult};
use athlete_insights_domain::{
    catalog::TestCatalog,
    record::RecordBatch,
    sports::SportsList,
    thresholds::{QualityLabel, ThresholdTable},
    tier::{Classification, MissReason},
    validation::ValidationReport,
    value::CellValue,
};
use athlete_insights_common::EngineSettings;
use tracing::{info, instrument};

/// The main classification engine
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    config: EngineSettings,
    catalog: Option<TestCatalog>,
    sports: Option<SportsList>,
    validator: RecordValidator,
    annotator: TierAnnotator,
    bucketer: ScoreBucketer,
}

impl ClassificationEngine {
    /// Engine with no reference data and the default threshold table
    pub fn new(config: EngineSettings) -> Self {
        ClassificationEngineBuilder::new().config(config).build()
    }

    pub fn builder() -> ClassificationEngineBuilder {
        ClassificationEngineBuilder::new()
    }

    pub fn config(&self) -> &EngineSettings {
        &self.config
    }

    /// The loaded catalog
    pub fn catalog(&self) -> ApplicationResult<&TestCatalog> {
        self.catalog
            .as_ref()
            .ok_or_else(|| ApplicationError::MissingReferenceData("test catalog".to_string()))
    }

    pub fn sports(&self) -> Option<&SportsList> {
        self.sports.as_ref()
    }

    /// The threshold table in use (defaults unless a custom table was given)
    pub fn thresholds(&self) -> &ThresholdTable {
        self.bucketer.table()
    }

    /// Classify one value; without a catalog every code is unknown
    pub fn classify(&self, test_code: &str, value: &CellValue) -> Classification {
        match &self.catalog {
            Some(catalog) => TierClassifier::classify(catalog, test_code, value),
            None => Classification::Miss(MissReason::UnknownTestCode),
        }
    }

    /// Quality label of a metric value under the engine's threshold table
    pub fn bucket(&self, metric: &str, value: f64) -> Option<QualityLabel> {
        self.bucketer.bucket(metric, value)
    }

    /// Validate a batch against whatever reference data is loaded
    pub fn validate(&self, batch: &RecordBatch) -> ValidationReport {
        self.validator
            .validate(batch, self.catalog.as_ref(), self.sports.as_ref())
    }

    /// Add the `tier_number` column; without a catalog every tier is null
    pub fn annotate(&self, batch: &RecordBatch) -> RecordBatch {
        match &self.catalog {
            Some(catalog) => self.annotator.annotate(batch, catalog),
            None => self.annotator.annotate(batch, &TestCatalog::new()),
        }
    }

    /// Validate, then annotate only if the batch passed
    #[instrument(skip_all, fields(rows = batch.len()))]
    pub fn validate_and_annotate(&self, batch: &RecordBatch) -> ApplicationResult<(RecordBatch, ValidationReport)> {
        let report = self.validate(batch);
        report.ensure_passed()?;
        let annotated = self.annotate(batch);
        info!(warnings = report.warnings.len(), "Batch validated and annotated");
        Ok((annotated, report))
    }

    /// Append `{metric}_Score` columns
    pub fn score(&self, batch: &RecordBatch) -> RecordBatch {
        self.bucketer.apply(batch)
    }
}

impl Default for ClassificationEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

/// Builder for ClassificationEngine
#[derive(Debug, Default)]
pub struct ClassificationEngineBuilder {
    config: EngineSettings,
    catalog: Option<TestCatalog>,
    sports: Option<SportsList>,
    thresholds: Option<ThresholdTable>,
}

impl ClassificationEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineSettings) -> Self {
        self.config = config;
        self
    }

    pub fn strict_conditions(mut self, strict: bool) -> Self {
        self.config.strict_conditions = strict;
        self
    }

    pub fn parallel_row_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_row_threshold = threshold;
        self
    }

    pub fn check_test_dates(mut self, check: bool) -> Self {
        self.config.check_test_dates = check;
        self
    }

    pub fn catalog(mut self, catalog: impl Into<Option<TestCatalog>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    pub fn sports(mut self, sports: impl Into<Option<SportsList>>) -> Self {
        self.sports = sports.into();
        self
    }

    /// Replace the default threshold table entirely
    pub fn thresholds(mut self, table: impl Into<Option<ThresholdTable>>) -> Self {
        self.thresholds = table.into();
        self
    }

    pub fn build(self) -> ClassificationEngine {
        let threshold = self.config.parallel_row_threshold;
        let bucketer = match self.thresholds {
            Some(table) => ScoreBucketer::with_table(table),
            None => ScoreBucketer::with_defaults(),
        }
        .parallel_row_threshold(threshold);

        ClassificationEngine {
            validator: RecordValidator::new(self.config.clone()),
            annotator: TierAnnotator::new(threshold),
            bucketer,
            catalog: self.catalog,
            sports: self.sports,
            config: self.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athlete_insights_domain::catalog::{ScoringKind, TestCatalogEntry};
    use athlete_insights_domain::record::{REQUIRED_COLUMNS, TIER_NUMBER};
    use athlete_insights_domain::thresholds::ThresholdBucket;

    fn catalog() -> TestCatalog {
        TestCatalog::from_entries(vec![TestCatalogEntry::new(
            "SPR10",
            "10 Yard Sprint",
            ScoringKind::Tiered,
        )
        .with_conditions([Some("<=1.50"), Some("<=1.55"), Some("<=1.60"), Some(">1.60")])])
    }

    fn batch(code: &str, sport: &str) -> RecordBatch {
        let mut batch = RecordBatch::new(REQUIRED_COLUMNS);
        batch
            .push_row(vec![
                "Ana".into(),
                "2024-03-01".into(),
                sport.into(),
                "Sprint".into(),
                code.into(),
                CellValue::Number(1.52),
            ])
            .unwrap();
        batch
    }

    #[test]
    fn test_engine_without_reference_data() {
        let engine = ClassificationEngine::default();
        assert!(matches!(
            engine.catalog(),
            Err(ApplicationError::MissingReferenceData(_))
        ));
        assert_eq!(
            engine.classify("SPR10", &CellValue::Number(1.4)),
            Classification::Miss(MissReason::UnknownTestCode)
        );
        let report = engine.validate(&batch("SPR10", "Soccer"));
        assert!(report.passed);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_validate_and_annotate() {
        let engine = ClassificationEngine::builder()
            .catalog(catalog())
            .sports(SportsList::new(vec!["Soccer"]))
            .build();

        let (annotated, report) = engine.validate_and_annotate(&batch("SPR10", "Soccer")).unwrap();
        assert!(report.passed);
        assert_eq!(annotated.cell(0, TIER_NUMBER), Some(&CellValue::Integer(2)));

        let failed = engine.validate_and_annotate(&batch("SPR10", "Curling"));
        assert!(matches!(failed, Err(ApplicationError::ValidationFailed(_))));
    }

    #[test]
    fn test_custom_thresholds_replace_defaults() {
        let table = ThresholdTable::from_buckets(vec![ThresholdBucket::new(
            "Jump",
            QualityLabel::Good,
            0.0,
            f64::INFINITY,
        )]);
        let engine = ClassificationEngine::builder().thresholds(table).build();
        assert_eq!(engine.bucket("Jump", 3.0), Some(QualityLabel::Good));
        assert_eq!(engine.bucket("CMJ (in)", 28.0), None);
        assert_eq!(ClassificationEngine::default().bucket("CMJ (in)", 28.0), Some(QualityLabel::Good));
    }

    #[test]
    fn test_builder_settings() {
        let engine = ClassificationEngine::builder()
            .strict_conditions(true)
            .parallel_row_threshold(16)
            .check_test_dates(false)
            .build();
        assert!(engine.config().strict_conditions);
        assert_eq!(engine.config().parallel_row_threshold, 16);
        assert!(!engine.config().check_test_dates);
        assert_eq!(engine.validator.config(), engine.config());
    }

    #[test]
    fn test_engine_and_config_file_share_defaults() {
        let engine = ClassificationEngine::default();
        assert_eq!(engine.config(), &athlete_insights_common::AppConfig::default().engine);
        assert_eq!(engine.validator.config(), engine.config());
    }
}
