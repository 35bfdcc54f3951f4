use super::{csv_reader, is_blank_row};
use crate::error::{LoadError, LoadResult};
use anyhow::Context;
use athlete_insights_domain::{record::RecordBatch, value::CellValue};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Load a record batch from a CSV file.
///
/// All columns are kept. Blank cells become null and every other cell stays
/// text exactly as written.
#[instrument]
pub fn load_records(path: &Path) -> anyhow::Result<RecordBatch> {
    let file = File::open(path).with_context(|| format!("Failed to open records file {}", path.display()))?;
    read_records(file).with_context(|| format!("Failed to read records from {}", path.display()))
}

/// Parse a record batch from CSV text
pub fn read_records<R: Read>(reader: R) -> LoadResult<RecordBatch> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers()?.clone();
    let width = headers.len();
    let mut batch = RecordBatch::new(headers.iter());

    for record in reader.records() {
        let record = record?;
        if is_blank_row(&record) {
            continue;
        }
        let mut row: Vec<CellValue> = record.iter().take(width).map(CellValue::from_raw).collect();
        row.resize(width, CellValue::Null);
        batch.push_row(row)?;
    }

    debug!(rows = batch.len(), columns = width, "Read record batch");
    Ok(batch)
}

/// Write a record batch as CSV; null cells are written empty
pub fn write_records(path: &Path, batch: &RecordBatch) -> LoadResult<()> {
    let file = File::create(path).map_err(|err| LoadError::io(path, err))?;
    write_records_to(file, batch)
}

pub fn write_records_to<W: Write>(writer: W, batch: &RecordBatch) -> LoadResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(batch.columns())?;
    for row in batch.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_records_keeps_text_cells() {
        let csv = "Athlete Name,Test Code,Value,Notes\nAna,SPR10,1.52,\nBen,HIPB,Balanced,late\n";
        let batch = read_records(csv.as_bytes()).unwrap();
        assert_eq!(batch.columns(), ["Athlete Name", "Test Code", "Value", "Notes"]);
        assert_eq!(batch.cell(0, "Value"), Some(&CellValue::from("1.52")));
        assert_eq!(batch.cell(0, "Notes"), Some(&CellValue::Null));
        assert_eq!(batch.cell(1, "Value"), Some(&CellValue::from("Balanced")));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let batch = read_records("a,b,c\n1\n".as_bytes()).unwrap();
        assert_eq!(batch.rows()[0], vec![CellValue::from("1"), CellValue::Null, CellValue::Null]);
    }

    #[test]
    fn test_write_records() {
        let batch = read_records("Code,tier_number\nSPR10,3\nXYZ,\n".as_bytes()).unwrap();
        let mut out = Vec::new();
        write_records_to(&mut out, &batch).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Code,tier_number\nSPR10,3\nXYZ,\n");
    }
}
