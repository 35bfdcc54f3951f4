//! Table formatting utilities

use anyhow::Result;
use athlete_insights_domain::{
    record::RecordBatch,
    validation::{IssueSeverity, ValidationReport},
};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a simple table with headers and rows
    pub fn simple(headers: Vec<&str>, rows: Vec<Vec<String>>) -> Result<String> {
        let mut table = Self::new();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        Ok(table.to_string())
    }

    /// Create a key-value table
    pub fn key_value(items: Vec<(&str, String)>) -> Result<String> {
        let mut table = Self::new();

        for (key, value) in items {
            table.add_row(vec![key, &value]);
        }

        Ok(table.to_string())
    }

    /// A record batch with its own column headers; nulls are blank
    pub fn batch(batch: &RecordBatch) -> Result<String> {
        let headers: Vec<&str> = batch.columns().iter().map(String::as_str).collect();
        let rows = batch
            .rows()
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        Self::simple(headers, rows)
    }

    /// Status line followed by one row per issue
    pub fn report(report: &ValidationReport) -> Result<String> {
        let status = if report.passed {
            Cell::new("PASSED").fg(Color::Green)
        } else {
            Cell::new("FAILED").fg(Color::Red)
        };

        let mut table = Self::new();
        table.set_header(vec!["Severity", "Category", "Message"]);
        for issue in report.errors.iter().chain(&report.warnings) {
            let severity = match issue.severity {
                IssueSeverity::Error => Cell::new("error").fg(Color::Red),
                IssueSeverity::Warning => Cell::new("warning").fg(Color::Yellow),
            };
            let category = serde_json::to_value(issue.category)?;
            table.add_row(vec![
                severity,
                Cell::new(category.as_str().unwrap_or_default()),
                Cell::new(&issue.message),
            ]);
        }

        let mut summary = Self::new();
        summary.add_row(vec![Cell::new("Result"), status]);
        if report.total_issues() == 0 {
            return Ok(summary.to_string());
        }
        Ok(format!("{}\n{}", summary, table))
    }
}
