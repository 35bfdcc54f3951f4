//! JSON and plain text formatters

use anyhow::Result;
use athlete_insights_domain::{record::RecordBatch, validation::ValidationReport};
use athlete_insights_infrastructure::write_records_to;
use serde::Serialize;
use serde_json::{Map, Value};

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    /// A batch as an array of objects keyed by column name
    pub fn batch(batch: &RecordBatch) -> Result<String> {
        let rows: Vec<Value> = batch
            .rows()
            .iter()
            .map(|row| -> Result<Value, serde_json::Error> {
                let mut object = Map::new();
                for (column, cell) in batch.columns().iter().zip(row) {
                    object.insert(column.clone(), serde_json::to_value(cell)?);
                }
                Ok(Value::Object(object))
            })
            .collect::<Result<_, _>>()?;
        Self::format(&rows)
    }
}

/// Plain text formatter
pub struct PlainFormatter;

impl PlainFormatter {
    /// A batch as CSV text
    pub fn batch(batch: &RecordBatch) -> Result<String> {
        let mut out = Vec::new();
        write_records_to(&mut out, batch)?;
        Ok(String::from_utf8(out)?)
    }

    /// `key: value` lines
    pub fn pairs(items: &[(&str, String)]) -> String {
        items
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line per issue, errors first
    pub fn report(report: &ValidationReport) -> String {
        let mut lines = vec![if report.passed { "PASSED" } else { "FAILED" }.to_string()];
        lines.extend(report.errors.iter().map(|issue| format!("error: {}", issue.message)));
        lines.extend(report.warnings.iter().map(|issue| format!("warning: {}", issue.message)));
        lines.join("\n")
    }
}
