use super::{column_indices, csv_reader, field, is_blank_row, open_reference};
use crate::error::{LoadError, LoadResult};
use crate::reference::ReferenceData;
use athlete_insights_domain::{
    errors::ReferenceDataError,
    thresholds::{format_bound, parse_max_bound, parse_min_bound, QualityLabel, ThresholdBucket, ThresholdTable},
};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Headers a threshold file must carry
pub const THRESHOLD_COLUMNS: [&str; 4] = ["Metric", "Score", "Min", "Max"];

const SOURCE: &str = "score thresholds";

/// Load a threshold table from `path`
#[instrument]
pub fn load_thresholds(path: &Path) -> LoadResult<ReferenceData<ThresholdTable>> {
    match open_reference(path, "Score thresholds")? {
        ReferenceData::Loaded(file) => read_thresholds(file).map(ReferenceData::Loaded),
        ReferenceData::Unavailable { reason } => Ok(ReferenceData::Unavailable { reason }),
    }
}

/// Parse a threshold table from CSV text, keeping row order
pub fn read_thresholds<R: Read>(reader: R) -> LoadResult<ThresholdTable> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers()?.clone();
    let [metric_col, score_col, min_col, max_col] = column_indices(&headers, &THRESHOLD_COLUMNS, SOURCE)?;

    let mut table = ThresholdTable::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if is_blank_row(&record) {
            continue;
        }
        let invalid = |err: ReferenceDataError| ReferenceDataError::InvalidRow {
            source_name: SOURCE.to_string(),
            row,
            message: err.to_string(),
        };

        let label: QualityLabel = field(&record, score_col).parse().map_err(invalid)?;
        let min = parse_min_bound(field(&record, min_col)).map_err(invalid)?;
        let max = parse_max_bound(field(&record, max_col)).map_err(invalid)?;

        table.push(ThresholdBucket::new(field(&record, metric_col).trim(), label, min, max));
    }

    info!(buckets = table.len(), metrics = table.metrics().len(), "Loaded score thresholds");
    Ok(table)
}

/// Write a threshold table; unbounded maxima are written as `∞`
pub fn write_thresholds(path: &Path, table: &ThresholdTable) -> LoadResult<()> {
    let file = std::fs::File::create(path).map_err(|err| LoadError::io(path, err))?;
    write_thresholds_to(file, table)
}

pub fn write_thresholds_to<W: Write>(writer: W, table: &ThresholdTable) -> LoadResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(THRESHOLD_COLUMNS)?;
    for bucket in table.buckets() {
        writer.write_record([
            bucket.metric.as_str(),
            bucket.label.as_str(),
            format_bound(bucket.min).as_str(),
            format_bound(bucket.max).as_str(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
