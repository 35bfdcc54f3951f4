//! Infrastructure layer for Athlete Insights
//!
//! This crate reads and writes the CSV files the engine works from:
//! - the test catalog (`Code, Test Name, Scoring Type, Tier 1..Tier 4`)
//! - the score threshold table (`Metric, Score, Min, Max`)
//! - the allowed sports list (`Name`)
//! - record batches (any columns)
//!
//! Reference loaders return [`ReferenceData`]: a missing file is
//! `Unavailable`, while a file that exists but cannot be parsed is an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use athlete_insights_infrastructure::files::{load_catalog, load_records};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("data/test_catalog.csv"))?;
//! let batch = load_records(Path::new("uploads/march.csv"))?;
//! println!("catalog {}, {} rows", catalog, batch.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod files;
pub mod reference;

// Re-export commonly used types
pub use error::{LoadError, LoadResult};
pub use files::{
    load_catalog, load_records, load_sports, load_thresholds, read_catalog, read_records, read_sports,
    read_thresholds, write_records, write_records_to, write_sports, write_sports_to, write_thresholds,
    write_thresholds_to,
};
pub use reference::ReferenceData;
