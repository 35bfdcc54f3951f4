//! Errors raised while reading or writing data files.

use athlete_insights_domain::errors::{RecordBatchError, ReferenceDataError};
use std::path::PathBuf;

/// File loading errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file exists but could not be opened or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Well-formed CSV whose content is not valid reference data
    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),

    /// Rows that do not fit the batch header
    #[error(transparent)]
    RecordBatch(#[from] RecordBatchError),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
