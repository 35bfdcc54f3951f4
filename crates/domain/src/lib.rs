//! Athlete Insights Domain Types
//!
//! This crate provides the data model for classifying athlete fitness-test
//! results: the test catalog and its tier conditions, quality-label threshold
//! tables, the allowed sports list, record batches and validation reports.
//!
//! ## Architecture
//!
//! - **condition**: single-bound numeric threshold expressions (`<=1.50`)
//! - **tier**: the four tier slots, their label/rank encodings and
//!   classification outcomes
//! - **catalog**: scoring kinds, catalog entries and the code-keyed catalog
//! - **thresholds**: quality labels, half-open buckets and the default table
//! - **sports**: allowed sports list and naming rules
//! - **value**: polymorphic cell values
//! - **record**: athlete records and column-ordered record batches
//! - **validation**: batch validation report types
//! - **errors**: error types
//!
//! ## Usage
//!
//! ```rust
//! use athlete_insights_domain::{
//!     catalog::{ScoringKind, TestCatalogEntry},
//!     condition::Condition,
//!     tier::Tier,
//! };
//!
//! let entry = TestCatalogEntry::new("SPR10", "10 Yard Sprint", ScoringKind::Tiered)
//!     .with_conditions([Some("<=1.50"), Some("<=1.55"), Some("<=1.60"), Some(">1.60")]);
//!
//! let first = entry.numeric_condition(Tier::One).unwrap();
//! assert!(first.matches(1.48));
//! assert_eq!(Tier::One.rank(), 3);
//! assert!(Condition::parse("Balanced").is_none());
//! ```

#![warn(clippy::all)]

pub mod catalog;
pub mod condition;
pub mod errors;
pub mod record;
pub mod sports;
pub mod thresholds;
pub mod tier;
pub mod validation;
pub mod value;

// Re-export commonly used types
pub use catalog::{ConditionWarning, ScoringKind, TestCatalog, TestCatalogEntry};
pub use condition::{Comparator, Condition};
pub use errors::{AppError, AppResult, ConditionError, RecordBatchError, ReferenceDataError};
pub use record::{AthleteRecord, RecordBatch, REQUIRED_COLUMNS, TIER_NUMBER};
pub use sports::SportsList;
pub use thresholds::{QualityLabel, ThresholdBucket, ThresholdTable, UNKNOWN_LABEL};
pub use tier::{Classification, MissReason, Tier};
pub use validation::{IssueCategory, IssueSeverity, ValidationIssue, ValidationReport};
pub use value::CellValue;
