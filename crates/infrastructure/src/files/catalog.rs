use super::{column_indices, csv_reader, field, is_blank_row, open_reference};
use crate::error::LoadResult;
use crate::reference::ReferenceData;
use athlete_insights_domain::{
    catalog::{ScoringKind, TestCatalog, TestCatalogEntry},
    errors::ReferenceDataError,
};
use std::io::Read;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Headers a catalog file must carry
pub const CATALOG_COLUMNS: [&str; 7] = ["Code", "Test Name", "Scoring Type", "Tier 1", "Tier 2", "Tier 3", "Tier 4"];

const SOURCE: &str = "test catalog";

/// Load the test catalog from `path`
#[instrument]
pub fn load_catalog(path: &Path) -> LoadResult<ReferenceData<TestCatalog>> {
    match open_reference(path, "Test catalog")? {
        ReferenceData::Loaded(file) => read_catalog(file).map(ReferenceData::Loaded),
        ReferenceData::Unavailable { reason } => Ok(ReferenceData::Unavailable { reason }),
    }
}

/// Parse a catalog from CSV text.
///
/// Rows with a blank code are skipped. Duplicate codes keep the first row.
pub fn read_catalog<R: Read>(reader: R) -> LoadResult<TestCatalog> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers()?.clone();
    let [code, name, kind, t1, t2, t3, t4] = column_indices(&headers, &CATALOG_COLUMNS, SOURCE)?;

    let mut catalog = TestCatalog::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if is_blank_row(&record) || field(&record, code).trim().is_empty() {
            continue;
        }

        let scoring_kind = field(&record, kind)
            .parse::<ScoringKind>()
            .map_err(|err| ReferenceDataError::InvalidRow {
                source_name: SOURCE.to_string(),
                row,
                message: err.to_string(),
            })?;

        let entry = TestCatalogEntry::new(field(&record, code), field(&record, name).trim(), scoring_kind)
            .with_conditions([t1, t2, t3, t4].map(|i| Some(field(&record, i))));
        catalog.insert(entry);
    }

    if catalog.ignored_duplicates() > 0 {
        warn!(
            ignored = catalog.ignored_duplicates(),
            "Duplicate test codes in catalog; first occurrence kept"
        );
    }
    info!(entries = catalog.len(), "Loaded test catalog");
    Ok(catalog)
}
