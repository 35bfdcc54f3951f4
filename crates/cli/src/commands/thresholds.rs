//! Default threshold table export

use anyhow::Result;
use athlete_insights_domain::thresholds::{format_bound, ThresholdTable};
use athlete_insights_infrastructure::{write_thresholds, write_thresholds_to};
use std::path::Path;

use crate::commands::CommandContext;
use crate::output::{colors, Formattable, JsonFormatter, TableFormatter};

impl Formattable for ThresholdTable {
    /// Unbounded maxima serialize as null
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self.buckets())
    }

    fn format_table(&self) -> Result<String> {
        let rows = self
            .buckets()
            .iter()
            .map(|bucket| {
                vec![
                    bucket.metric.clone(),
                    bucket.label.to_string(),
                    format_bound(bucket.min),
                    format_bound(bucket.max),
                ]
            })
            .collect();
        TableFormatter::simple(vec!["Metric", "Score", "Min", "Max"], rows)
    }

    /// The table in its file form
    fn format_plain(&self) -> Result<String> {
        let mut out = Vec::new();
        write_thresholds_to(&mut out, self)?;
        Ok(String::from_utf8(out)?)
    }
}

/// Print the built-in table, or write it as an editable threshold file
pub fn run(ctx: &CommandContext, output: Option<&Path>) -> Result<()> {
    let table = ThresholdTable::defaults();
    match output {
        Some(path) => {
            write_thresholds(path, &table)?;
            ctx.note(&colors::success(&format!("Exported {} thresholds to {}", table.len(), path.display())).to_string());
            Ok(())
        }
        None => ctx.emit(&table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_renders() {
        let table = ThresholdTable::defaults();
        let text = table.format_table().unwrap();
        assert!(text.contains("Pro-Agility (s)"));
        assert!(text.contains("∞"));

        let plain = table.format_plain().unwrap();
        assert!(plain.starts_with("Metric,Score,Min,Max\n"));
    }
}
