//! Application layer for Athlete Insights
//!
//! This crate implements the classification and validation operations on
//! top of the domain types.
//!
//! ## Modules
//!
//! - `scoring` - tier classifier, score bucketer and the engine facade
//! - `validation` - record batch validation
//! - `annotation` - derived `tier_number` column

pub mod annotation;
mod rows;
pub mod scoring;
pub mod validation;

// Re-export commonly used types
pub use annotation::{annotate, TierAnnotator};
pub use scoring::{
    score_column, ClassificationEngine, ClassificationEngineBuilder, ScoreBucketer, TierClassifier,
    SCORE_COLUMN_SUFFIX,
};
pub use validation::{validate, RecordValidator, ReportExt};

/// Engine and validator settings, shared with the `[engine]` config section
pub use athlete_insights_common::EngineSettings;

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Batch failed validation
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Reference data required by the operation was not loaded
    #[error("Reference data unavailable: {0}")]
    MissingReferenceData(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Get error code for reports
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::InvalidInput(_) => "INVALID_INPUT",
            ApplicationError::ValidationFailed(_) => "VALIDATION_FAILED",
            ApplicationError::MissingReferenceData(_) => "MISSING_REFERENCE_DATA",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<athlete_insights_domain::AppError> for ApplicationError {
    fn from(err: athlete_insights_domain::AppError) -> Self {
        match err {
            athlete_insights_domain::AppError::Internal(msg) => ApplicationError::Internal(msg),
            other => ApplicationError::InvalidInput(other.to_string()),
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
