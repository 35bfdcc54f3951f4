//! Validation report types for record batches.
//!
//! A report carries blocking errors and non-blocking warnings. `passed` is
//! true exactly when there are no errors; warnings never affect it.

use serde::{Deserialize, Serialize};

/// Result of validating one record batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the batch passed (no errors)
    pub passed: bool,

    /// Blocking problems, in check order
    pub errors: Vec<ValidationIssue>,

    /// Non-blocking observations
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create a passing report
    pub fn success() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a blocking issue
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.passed = false;
        self.errors.push(ValidationIssue {
            severity: IssueSeverity::Error,
            ..issue
        });
    }

    /// Record a non-blocking issue
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            ..issue
        });
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.passed = self.errors.is_empty();
    }

    /// Error messages in check order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors of one category
    pub fn errors_of(&self, category: IssueCategory) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().filter(move |e| e.category == category)
    }

    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::success()
    }
}

/// What kind of problem an issue describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Required columns absent from the batch
    MissingColumns,
    /// Test codes that are not in the catalog
    UnknownTestCode,
    /// Sports that are not in the allowed list
    UnknownSport,
    /// Reference data unavailable, check skipped
    MissingReferenceData,
    /// Catalog condition that never matches
    MalformedCondition,
    /// Test date that could not be parsed
    UnparsableTestDate,
}

/// Individual validation issue.
///
/// `rows` holds the zero-based indices of the offending rows, empty for
/// batch-level issues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub category: IssueCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<usize>,
    pub severity: IssueSeverity,
}

impl ValidationIssue {
    /// Create a new error-level issue
    pub fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            rows: Vec::new(),
            severity: IssueSeverity::Error,
        }
    }

    /// Create a new warning-level issue
    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            rows: Vec::new(),
            severity: IssueSeverity::Warning,
        }
    }

    pub fn with_rows(mut self, rows: Vec<usize>) -> Self {
        self.rows = rows;
        self
    }
}

/// Severity level of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Fails the batch
    Error,

    /// Reported but does not fail the batch
    Warning,
}

impl IssueSeverity {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}
