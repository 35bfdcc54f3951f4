//! Record batch validation
//!
//! Checks run in a fixed order and every violation is collected:
//!
//! 1. required columns (short-circuits everything else when it fails)
//! 2. test-code membership in the catalog
//! 3. sport membership in the allowed list
//!
//! Reference data that is unavailable skips its check with a warning.
//! Strict condition lint and the test-date check only ever add warnings.

use crate::rows::filter_map_rows;
use crate::{ApplicationError, ApplicationResult};
use athlete_insights_common::datetime::parse_test_date;
use athlete_insights_domain::{
    catalog::TestCatalog,
    record::{RecordBatch, REQUIRED_COLUMNS, SPORT, TEST_CODE, TEST_DATE},
    sports::SportsList,
    validation::{IssueCategory, ValidationIssue, ValidationReport},
    value::CellValue,
};
use athlete_insights_common::EngineSettings;
use tracing::{debug, info, instrument, warn};

/// Validates record batches against a catalog and a sports list
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    config: EngineSettings,
}

impl RecordValidator {
    pub fn new(config: EngineSettings) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineSettings {
        &self.config
    }

    /// Validate `batch`. Always returns a report; `None` reference data means
    /// the corresponding check is skipped.
    #[instrument(skip_all, fields(rows = batch.len(), strict = self.config.strict_conditions))]
    pub fn validate(
        &self,
        batch: &RecordBatch,
        catalog: Option<&TestCatalog>,
        sports: Option<&SportsList>,
    ) -> ValidationReport {
        let mut report = ValidationReport::success();

        let missing = batch.missing_columns(&REQUIRED_COLUMNS);
        if !missing.is_empty() {
            warn!(?missing, "Batch is missing required columns");
            report.add_error(ValidationIssue::error(
                IssueCategory::MissingColumns,
                format!("Missing required columns: {}", missing.join(", ")),
            ));
            return report;
        }

        match catalog {
            Some(catalog) => {
                let bad = self.offending_rows(batch, TEST_CODE, |code| catalog.contains(code));
                if !bad.is_empty() {
                    report.add_error(
                        ValidationIssue::error(
                            IssueCategory::UnknownTestCode,
                            format!("Invalid Test Code values: {}", describe_rows(&bad)),
                        )
                        .with_rows(bad.iter().map(|(row, _)| *row).collect()),
                    );
                }
            }
            None => report.add_warning(ValidationIssue::warning(
                IssueCategory::MissingReferenceData,
                "Test catalog unavailable; Test Code check skipped",
            )),
        }

        match sports {
            Some(sports) => {
                let bad = self.offending_rows(batch, SPORT, |sport| sports.contains(sport));
                if !bad.is_empty() {
                    report.add_error(
                        ValidationIssue::error(
                            IssueCategory::UnknownSport,
                            format!(
                                "Invalid Sport values: {}. Valid sports: {}",
                                describe_rows(&bad),
                                sports.names().join(", ")
                            ),
                        )
                        .with_rows(bad.iter().map(|(row, _)| *row).collect()),
                    );
                }
            }
            None => report.add_warning(ValidationIssue::warning(
                IssueCategory::MissingReferenceData,
                "Sports list unavailable; Sport check skipped",
            )),
        }

        if self.config.strict_conditions {
            if let Some(catalog) = catalog {
                for lint in catalog.lint() {
                    report.add_warning(ValidationIssue::warning(
                        IssueCategory::MalformedCondition,
                        lint.to_string(),
                    ));
                }
            }
        }

        if self.config.check_test_dates {
            let bad = self.offending_rows(batch, TEST_DATE, |date| parse_test_date(date).is_ok());
            if !bad.is_empty() {
                report.add_warning(
                    ValidationIssue::warning(
                        IssueCategory::UnparsableTestDate,
                        format!("Unparsable Test Date values: {}", describe_rows(&bad)),
                    )
                    .with_rows(bad.iter().map(|(row, _)| *row).collect()),
                );
            }
        }

        if report.passed {
            debug!(warnings = report.warnings.len(), "Batch passed validation");
        } else {
            info!(errors = report.errors.len(), "Batch failed validation");
        }
        report
    }

    /// Rows of `column` whose trimmed text fails `accept`, in row order
    fn offending_rows<F>(&self, batch: &RecordBatch, column: &str, accept: F) -> Vec<(usize, String)>
    where
        F: Fn(&str) -> bool + Sync + Send,
    {
        let Some(index) = batch.column_index(column) else {
            return Vec::new();
        };
        let rows = batch.rows();
        filter_map_rows(rows.len(), self.config.parallel_row_threshold, |row| {
            let text = cell_text(&rows[row][index]);
            (!accept(&text)).then_some((row, text))
        })
    }
}

/// Validate with default settings
pub fn validate(
    batch: &RecordBatch,
    catalog: Option<&TestCatalog>,
    sports: Option<&SportsList>,
) -> ValidationReport {
    RecordValidator::default().validate(batch, catalog, sports)
}

/// Conversion of a failed report into an application error
pub trait ReportExt {
    fn ensure_passed(&self) -> ApplicationResult<()>;
}

impl ReportExt for ValidationReport {
    fn ensure_passed(&self) -> ApplicationResult<()> {
        if self.passed {
            Ok(())
        } else {
            Err(ApplicationError::ValidationFailed(self.messages().join("; ")))
        }
    }
}

fn cell_text(cell: &CellValue) -> String {
    cell.to_string().trim().to_string()
}

fn describe_rows(rows: &[(usize, String)]) -> String {
    rows.iter()
        .map(|(row, value)| format!("row {} ('{}')", row, value))
        .collect::<Vec<_>>()
        .join(", ")
}
