//! Output formatting for CLI

use anyhow::Result;
use athlete_insights_domain::{record::RecordBatch, validation::ValidationReport};
use serde::{Deserialize, Serialize};

mod formatters;
mod table;

pub use formatters::{JsonFormatter, PlainFormatter};
pub use table::TableFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Types that render differently per output format
pub trait Formattable {
    fn format_json(&self) -> Result<String>;

    fn format_table(&self) -> Result<String>;

    fn format_plain(&self) -> Result<String>;

    /// Format using the specified format
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Table => self.format_table(),
            OutputFormat::Plain => self.format_plain(),
        }
    }
}

impl Formattable for RecordBatch {
    fn format_json(&self) -> Result<String> {
        JsonFormatter::batch(self)
    }

    fn format_table(&self) -> Result<String> {
        TableFormatter::batch(self)
    }

    /// Plain output is the CSV form of the batch
    fn format_plain(&self) -> Result<String> {
        PlainFormatter::batch(self)
    }
}

impl Formattable for ValidationReport {
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    fn format_table(&self) -> Result<String> {
        TableFormatter::report(self)
    }

    fn format_plain(&self) -> Result<String> {
        Ok(PlainFormatter::report(self))
    }
}

/// Color helpers
pub mod colors {
    use colored::*;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    pub fn bold(s: &str) -> ColoredString {
        s.bold()
    }
}
