//! Athlete records and record batches.
//!
//! A [`RecordBatch`] is a plain column-ordered table: the engine never assumes
//! a storage or UI binding. Batches are never mutated by classification;
//! derived columns are added to copies.

use crate::errors::RecordBatchError;
use crate::value::CellValue;
use serde::{Deserialize, Serialize};

pub const ATHLETE_NAME: &str = "Athlete Name";
pub const TEST_DATE: &str = "Test Date";
pub const SPORT: &str = "Sport";
pub const TEST_NAME: &str = "Test Name";
pub const TEST_CODE: &str = "Test Code";
pub const VALUE: &str = "Value";

/// Derived ordinal tier column added by annotation
pub const TIER_NUMBER: &str = "tier_number";

/// The six canonical fields every incoming batch must carry, in order
pub const REQUIRED_COLUMNS: [&str; 6] = [ATHLETE_NAME, TEST_DATE, SPORT, TEST_NAME, TEST_CODE, VALUE];

/// One athlete test observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteRecord {
    #[serde(rename = "Athlete Name")]
    pub athlete_name: String,
    #[serde(rename = "Test Date")]
    pub test_date: String,
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Test Name")]
    pub test_name: String,
    #[serde(rename = "Test Code")]
    pub test_code: String,
    #[serde(rename = "Value")]
    pub value: CellValue,
}

impl AthleteRecord {
    /// Cells in [`REQUIRED_COLUMNS`] order
    pub fn into_row(self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.athlete_name),
            CellValue::Text(self.test_date),
            CellValue::Text(self.sport),
            CellValue::Text(self.test_name),
            CellValue::Text(self.test_code),
            self.value,
        ]
    }
}

/// Ordered rows under named columns.
///
/// Every row has exactly one cell per column; deserialization rejects
/// ragged input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecordBatch")]
pub struct RecordBatch {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

#[derive(Deserialize)]
struct RawRecordBatch {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<CellValue>>,
}

impl TryFrom<RawRecordBatch> for RecordBatch {
    type Error = RecordBatchError;

    fn try_from(raw: RawRecordBatch) -> Result<Self, Self::Error> {
        let mut batch = RecordBatch::new(raw.columns);
        for row in raw.rows {
            batch.push_row(row)?;
        }
        Ok(batch)
    }
}

impl RecordBatch {
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// A batch with the canonical columns holding `records`
    pub fn from_records(records: impl IntoIterator<Item = AthleteRecord>) -> Self {
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.into_iter().map(AthleteRecord::into_row).collect(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), RecordBatchError> {
        if row.len() != self.columns.len() {
            return Err(RecordBatchError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Names from `required` absent from this batch, in `required` order
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|c| !self.has_column(c))
            .collect()
    }

    /// Cell at (`row`, `column`)
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// All cells of one column in row order
    pub fn column_values(&self, column: &str) -> Result<Vec<&CellValue>, RecordBatchError> {
        let index = self
            .column_index(column)
            .ok_or_else(|| RecordBatchError::ColumnNotFound(column.to_string()))?;
        Ok(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Copy of this batch without `column`; unchanged copy if absent
    pub fn without_column(&self, column: &str) -> Self {
        let Some(index) = self.column_index(column) else {
            return self.clone();
        };
        let mut columns = self.columns.clone();
        columns.remove(index);
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.remove(index);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Insert a column at `index`, one value per row.
    pub fn insert_column(
        &mut self,
        index: usize,
        name: impl Into<String>,
        values: Vec<CellValue>,
    ) -> Result<(), RecordBatchError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(RecordBatchError::DuplicateColumn(name));
        }
        if values.len() != self.rows.len() {
            return Err(RecordBatchError::RowWidth {
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        let index = index.min(self.columns.len());
        self.splice_column(index, name, values);
        Ok(())
    }

    fn splice_column(&mut self, index: usize, name: String, values: Vec<CellValue>) {
        self.columns.insert(index, name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(index, value);
        }
    }

    /// Copy of this batch with a derived column (re)computed.
    ///
    /// Any existing column called `name` is dropped first, and the new column
    /// goes right after `anchor`, or last when there is no anchor or it is
    /// absent. Values are padded with nulls (or truncated) to the row count.
    pub fn with_derived_column(&self, anchor: Option<&str>, name: &str, mut values: Vec<CellValue>) -> Self {
        let mut derived = self.without_column(name);
        let index = anchor
            .and_then(|a| derived.column_index(a))
            .map(|i| i + 1)
            .unwrap_or(derived.columns.len());
        values.resize(derived.rows.len(), CellValue::Null);
        derived.splice_column(index, name.to_string(), values);
        derived
    }

    /// Rows whose `Sport` equals `sport`; empty when the column is absent
    pub fn filter_by_sport(&self, sport: &str) -> Self {
        let rows = match self.column_index(SPORT) {
            Some(index) => self
                .rows
                .iter()
                .filter(|row| row[index].as_text().map(str::trim) == Some(sport.trim()))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}
