//! Quality-label bucketing of continuous metrics.

use crate::rows::map_rows;
use athlete_insights_domain::{
    record::RecordBatch,
    thresholds::{QualityLabel, ThresholdTable, DEFAULT_METRICS, UNKNOWN_LABEL},
    value::CellValue,
};
use tracing::{debug, instrument};

/// Suffix of the derived label column for a metric
pub const SCORE_COLUMN_SUFFIX: &str = "_Score";

/// Name of the derived label column for `metric`
pub fn score_column(metric: &str) -> String {
    format!("{}{}", metric, SCORE_COLUMN_SUFFIX)
}

/// Assigns quality labels from exactly one threshold table.
///
/// The table is either the built-in defaults or a caller-supplied table;
/// the two are never merged. Scored columns are always the built-in metric
/// names; a custom table that lacks one of them yields `Unknown` for it
/// rather than falling back to the defaults.
#[derive(Debug, Clone)]
pub struct ScoreBucketer {
    table: ThresholdTable,
    parallel_row_threshold: usize,
}

impl ScoreBucketer {
    /// Bucketer over the built-in table
    pub fn with_defaults() -> Self {
        Self::with_table(ThresholdTable::defaults())
    }

    /// Bucketer over a custom table
    pub fn with_table(table: ThresholdTable) -> Self {
        Self {
            table,
            parallel_row_threshold: usize::MAX,
        }
    }

    pub fn parallel_row_threshold(mut self, threshold: usize) -> Self {
        self.parallel_row_threshold = threshold;
        self
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    /// First bucket of `metric`, in table order, with `min <= value < max`
    pub fn bucket(&self, metric: &str, value: f64) -> Option<QualityLabel> {
        self.table
            .for_metric(metric)
            .find(|bucket| bucket.contains(value))
            .map(|bucket| bucket.label)
    }

    /// Label text for a cell; non-numeric cells and misses are `Unknown`
    pub fn label_for(&self, metric: &str, value: &CellValue) -> &'static str {
        value
            .as_number()
            .and_then(|v| self.bucket(metric, v))
            .map(|label| label.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Append a `{metric}_Score` column for every built-in metric present as
    /// a column of `batch`. Existing score columns are recomputed.
    #[instrument(skip_all, fields(rows = batch.len()))]
    pub fn apply(&self, batch: &RecordBatch) -> RecordBatch {
        let mut scored = batch.clone();
        for metric in DEFAULT_METRICS {
            let Some(index) = batch.column_index(metric) else {
                continue;
            };
            let rows = batch.rows();
            let labels = map_rows(rows.len(), self.parallel_row_threshold, |row| {
                CellValue::from(self.label_for(metric, &rows[row][index]))
            });
            scored = scored.with_derived_column(None, &score_column(metric), labels);
            debug!(metric, "Scored metric column");
        }
        scored
    }
}

impl Default for ScoreBucketer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
