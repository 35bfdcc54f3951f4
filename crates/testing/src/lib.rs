//! Testing utilities for Athlete Insights
//!
//! This crate provides:
//! - Fixtures for a representative catalog, sports list and record batch
//! - Builder patterns for record batches and catalog entries
//! - Property-based testing strategies
//!
//! # Examples
//!
//! ```
//! use athlete_insights_testing::{builders::*, fixtures::*};
//!
//! let catalog = create_test_catalog();
//! let batch = RecordBatchBuilder::new()
//!     .with_row("Soccer", "SPR10", 1.52)
//!     .build();
//!
//! assert!(catalog.contains("SPR10"));
//! assert_eq!(batch.len(), 1);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
