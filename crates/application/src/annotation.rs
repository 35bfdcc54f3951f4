//! Tier annotation of record batches.

use crate::rows::map_rows;
use crate::scoring::TierClassifier;
use athlete_insights_domain::{
    catalog::TestCatalog,
    record::{RecordBatch, TEST_CODE, TIER_NUMBER, VALUE},
    tier::{Classification, MissReason},
    value::CellValue,
};
use tracing::{debug, instrument};

/// Adds the derived `tier_number` column to a batch
#[derive(Debug, Clone)]
pub struct TierAnnotator {
    parallel_row_threshold: usize,
}

impl TierAnnotator {
    pub fn new(parallel_row_threshold: usize) -> Self {
        Self {
            parallel_row_threshold,
        }
    }

    /// Classification of every row, in row order.
    ///
    /// Rows are classified by their `Test Code` and `Value` cells; a batch
    /// lacking either column classifies every row as an unknown code.
    pub fn classifications(&self, batch: &RecordBatch, catalog: &TestCatalog) -> Vec<Classification> {
        let (Some(code_index), Some(value_index)) = (batch.column_index(TEST_CODE), batch.column_index(VALUE))
        else {
            return vec![Classification::Miss(MissReason::UnknownTestCode); batch.len()];
        };
        let rows = batch.rows();
        map_rows(rows.len(), self.parallel_row_threshold, |row| {
            let code = rows[row][code_index].to_string();
            TierClassifier::classify(catalog, &code, &rows[row][value_index])
        })
    }

    /// New batch with `tier_number` right after `Test Code` (or last when
    /// there is no such column). Any existing `tier_number` is recomputed;
    /// rows without a tier hold null.
    #[instrument(skip_all, fields(rows = batch.len()))]
    pub fn annotate(&self, batch: &RecordBatch, catalog: &TestCatalog) -> RecordBatch {
        let outcomes = self.classifications(batch, catalog);
        let matched = outcomes.iter().filter(|c| c.is_match()).count();
        let values = outcomes
            .iter()
            .map(|c| c.rank().map(|rank| CellValue::Integer(rank.into())).unwrap_or_default())
            .collect();
        debug!(matched, unmatched = outcomes.len() - matched, "Annotated batch");
        batch.with_derived_column(Some(TEST_CODE), TIER_NUMBER, values)
    }
}

impl Default for TierAnnotator {
    fn default() -> Self {
        Self::new(usize::MAX)
    }
}

/// Annotate with default settings
pub fn annotate(batch: &RecordBatch, catalog: &TestCatalog) -> RecordBatch {
    TierAnnotator::default().annotate(batch, catalog)
}
