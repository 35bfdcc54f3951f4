//! Fluent builders for test batches and catalog entries.

use athlete_insights_domain::{
    catalog::{ScoringKind, TestCatalogEntry},
    record::{AthleteRecord, RecordBatch, REQUIRED_COLUMNS},
    tier::TIER_SLOTS,
    value::CellValue,
};

use crate::fixtures::{athlete_name, test_date};

/// Builder for record batches.
///
/// Rows are added with the canonical columns; columns can be dropped or
/// extra ones appended to exercise structural validation.
#[derive(Clone, Default)]
pub struct RecordBatchBuilder {
    records: Vec<AthleteRecord>,
    dropped: Vec<String>,
    extra: Vec<(String, CellValue)>,
}

impl RecordBatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: AthleteRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Add a row with a random athlete and date
    pub fn with_row(mut self, sport: &str, code: &str, value: impl Into<CellValue>) -> Self {
        self.records.push(AthleteRecord {
            athlete_name: athlete_name(),
            test_date: test_date(),
            sport: sport.to_string(),
            test_name: format!("{} test", code),
            test_code: code.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        if let Some(last) = self.records.last_mut() {
            last.test_date = date.into();
        }
        self
    }

    pub fn without_column(mut self, column: impl Into<String>) -> Self {
        self.dropped.push(column.into());
        self
    }

    /// Append a column holding `value` on every row
    pub fn with_column(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.extra.push((column.into(), value.into()));
        self
    }

    pub fn build(self) -> RecordBatch {
        let mut batch = RecordBatch::from_records(self.records);
        for column in &self.dropped {
            batch = batch.without_column(column);
        }
        for (column, value) in self.extra {
            batch = batch.with_derived_column(None, &column, vec![value; batch.len()]);
        }
        batch
    }
}

/// Builder for catalog entries
#[derive(Clone)]
pub struct CatalogEntryBuilder {
    code: String,
    name: String,
    scoring_kind: ScoringKind,
    conditions: [Option<String>; TIER_SLOTS],
}

impl CatalogEntryBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: format!("{} test", code),
            code,
            scoring_kind: ScoringKind::Tiered,
            conditions: Default::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: ScoringKind) -> Self {
        self.scoring_kind = kind;
        self
    }

    /// Set the condition of one slot, 1-based like the catalog headers
    pub fn tier(mut self, tier: usize, condition: impl Into<String>) -> Self {
        if let Some(slot) = tier.checked_sub(1).and_then(|i| self.conditions.get_mut(i)) {
            *slot = Some(condition.into());
        }
        self
    }

    pub fn build(self) -> TestCatalogEntry {
        TestCatalogEntry::new(self.code, self.name, self.scoring_kind).with_conditions(self.conditions)
    }
}

/// Canonical column names, owned
pub fn canonical_columns() -> Vec<String> {
    REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
}
