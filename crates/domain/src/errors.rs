//! Error types for the athlete insights domain.
//!
//! Classification misses are not errors (see [`crate::tier::Classification`]).
//! The types here cover reference data that cannot be built at all, and
//! structural misuse of record batches.

/// Top-level domain error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Reference data could not be built
    #[error("Reference data error: {0}")]
    ReferenceData(#[from] ReferenceDataError),

    /// Record batch shape error
    #[error("Record batch error: {0}")]
    RecordBatch(#[from] RecordBatchError),

    /// Malformed condition (strict mode only)
    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ReferenceData(_) => "REFERENCE_DATA_ERROR",
            Self::RecordBatch(_) => "RECORD_BATCH_ERROR",
            Self::Condition(_) => "CONDITION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Errors raised while building a catalog, threshold table or sports list
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceDataError {
    /// Required column missing from a reference file
    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn { source_name: String, column: String },

    /// Unknown scoring type
    #[error("Unknown scoring type '{0}' (expected Tiered, Movement Quality or Calculated)")]
    InvalidScoringKind(String),

    /// Unknown quality label
    #[error("Unknown score label '{0}' (expected Poor, Fair, Good or Excellent)")]
    InvalidLabel(String),

    /// Bound that is neither a number nor the infinity sentinel
    #[error("Invalid threshold bound '{0}'")]
    InvalidBound(String),

    /// Sport name that fails the naming rules
    #[error("Invalid sport name '{name}': {reason}")]
    InvalidSportName { name: String, reason: String },

    /// Row-level problem in a reference file
    #[error("{source_name} row {row}: {message}")]
    InvalidRow {
        source_name: String,
        row: usize,
        message: String,
    },

    /// Reference data with no usable rows
    #[error("{0} is empty")]
    Empty(String),
}

/// Record batch shape errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordBatchError {
    /// Row width does not match the column count
    #[error("Row has {found} cells but the batch has {expected} columns")]
    RowWidth { expected: usize, found: usize },

    /// Column lookup failed
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Column with this name already exists
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
}

/// Condition parsing errors (strict mode)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// Not of the form `<op><number>`
    #[error("Malformed condition '{0}' (expected <, <=, > or >= followed by a number)")]
    Malformed(String),
}

/// Application-wide result type
pub type AppResult<T> = Result<T, AppError>;

/// Reference data result type
pub type ReferenceDataResult<T> = Result<T, ReferenceDataError>;
