//! Effective configuration display

use anyhow::Result;
use athlete_insights_common::AppConfig;
use std::path::PathBuf;

use crate::commands::CommandContext;
use crate::output::{Formattable, PlainFormatter, TableFormatter};

fn path_or_unset(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}

fn entries(config: &AppConfig) -> Vec<(&'static str, String)> {
    vec![
        ("Catalog file", path_or_unset(&config.reference.catalog_path)),
        ("Sports file", path_or_unset(&config.reference.sports_path)),
        ("Threshold file", path_or_unset(&config.reference.thresholds_path)),
        ("Strict conditions", config.engine.strict_conditions.to_string()),
        ("Parallel row threshold", config.engine.parallel_row_threshold.to_string()),
        ("Check test dates", config.engine.check_test_dates.to_string()),
        ("Log level", config.telemetry.log_level.clone()),
        ("JSON logging", config.telemetry.json_logging.to_string()),
    ]
}

impl Formattable for AppConfig {
    fn format_json(&self) -> Result<String> {
        self.to_pretty_json()
    }

    fn format_table(&self) -> Result<String> {
        TableFormatter::key_value(entries(self))
    }

    fn format_plain(&self) -> Result<String> {
        Ok(PlainFormatter::pairs(&entries(self)))
    }
}

/// Print the configuration in effect after all sources are merged
pub fn show(ctx: &CommandContext) -> Result<()> {
    ctx.emit(&ctx.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_config_lists_unset_paths() {
        let text = AppConfig::default().format_plain().unwrap();
        assert!(text.contains("Catalog file: (not set)"));
        assert!(text.contains("Parallel row threshold: 2048"));
    }
}
