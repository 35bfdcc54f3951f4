//! CSV readers and writers for reference data and record batches.
//!
//! Header names are matched after trimming. Extra columns are ignored by the
//! reference loaders and kept by the record loader.

mod catalog;
mod records;
mod sports;
mod thresholds;

pub use catalog::{load_catalog, read_catalog, CATALOG_COLUMNS};
pub use records::{load_records, read_records, write_records, write_records_to};
pub use sports::{load_sports, read_sports, write_sports, write_sports_to, SPORTS_COLUMN};
pub use thresholds::{
    load_thresholds, read_thresholds, write_thresholds, write_thresholds_to, THRESHOLD_COLUMNS,
};

use crate::error::{LoadError, LoadResult};
use crate::reference::ReferenceData;
use athlete_insights_domain::errors::ReferenceDataError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// CSV reader with trimmed headers over any byte source
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::Headers).flexible(true).from_reader(reader)
}

/// Open `path` for a reference loader.
///
/// A missing file is reported as unavailable; any other open failure is an
/// error.
pub(crate) fn open_reference(path: &Path, what: &str) -> LoadResult<ReferenceData<File>> {
    match File::open(path) {
        Ok(file) => {
            debug!(path = %path.display(), what, "Opened reference file");
            Ok(ReferenceData::Loaded(file))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), what, "Reference file not found");
            Ok(ReferenceData::unavailable(format!(
                "{} file not found: {}",
                what,
                path.display()
            )))
        }
        Err(err) => Err(LoadError::io(path, err)),
    }
}

/// Position of each of `wanted` within `headers`
pub(crate) fn column_indices<const N: usize>(
    headers: &StringRecord,
    wanted: &[&str; N],
    source_name: &str,
) -> Result<[usize; N], ReferenceDataError> {
    let mut indices = [0; N];
    for (slot, name) in indices.iter_mut().zip(wanted) {
        *slot = headers
            .iter()
            .position(|h| h == *name)
            .ok_or_else(|| ReferenceDataError::MissingColumn {
                source_name: source_name.to_string(),
                column: name.to_string(),
            })?;
    }
    Ok(indices)
}

/// Cell `index` of `record`, blank when the row is short
pub(crate) fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

/// True when every cell of the row is blank
pub(crate) fn is_blank_row(record: &StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_indices_match_trimmed_headers() {
        let mut reader = csv_reader(" Metric ,Max,Score,Min\n".as_bytes());
        let headers = reader.headers().unwrap().clone();
        let indices = column_indices(&headers, &["Metric", "Score", "Min", "Max"], "thresholds").unwrap();
        assert_eq!(indices, [0, 2, 3, 1]);

        let missing = column_indices(&headers, &["Metric", "Label"], "thresholds");
        assert!(matches!(
            missing,
            Err(ReferenceDataError::MissingColumn { column, .. }) if column == "Label"
        ));
    }

    #[test]
    fn test_open_reference_missing_file() {
        let opened = open_reference(Path::new("/definitely/not/here.csv"), "Catalog").unwrap();
        assert!(opened.reason().unwrap().contains("not found"));
    }
}
