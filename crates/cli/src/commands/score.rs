//! Wide-table quality scoring

use anyhow::{bail, Result};
use athlete_insights_application::ClassificationEngine;
use athlete_insights_infrastructure::{load_records, ReferenceData};
use std::path::Path;
use tracing::{info, warn};

use crate::commands::CommandContext;

/// Append `{metric}_Score` columns to a wide records file.
///
/// A threshold file named on the command line must exist. One that only
/// comes from configuration falls back to the built-in table when missing.
pub fn run(ctx: &CommandContext, records: &Path, thresholds: Option<&Path>) -> Result<()> {
    let table = match ctx.thresholds(thresholds)? {
        ReferenceData::Loaded(table) => Some(table),
        ReferenceData::Unavailable { reason } if thresholds.is_some() => {
            bail!("Threshold table unavailable: {}", reason)
        }
        ReferenceData::Unavailable { reason } => {
            warn!(%reason, "Using default threshold table");
            None
        }
    };

    let batch = load_records(records)?;
    let engine = ClassificationEngine::builder()
        .config(ctx.engine_config())
        .thresholds(table)
        .build();

    let scored = engine.score(&batch);
    info!(
        rows = scored.len(),
        metrics = engine.thresholds().metrics().len(),
        "Scored records"
    );
    ctx.emit(&scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use athlete_insights_common::AppConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_score_with_defaults() {
        let dir = TempDir::new().unwrap();
        let records = dir.path().join("wide.csv");
        fs::write(&records, "Athlete,CMJ (in),5-Jump RSI\nAna,28.2,2.3\n").unwrap();

        let ctx = CommandContext::new(AppConfig::default(), OutputFormat::Plain);
        assert!(run(&ctx, &records, None).is_ok());
    }

    #[test]
    fn test_explicit_missing_threshold_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let records = dir.path().join("wide.csv");
        fs::write(&records, "Athlete,CMJ (in)\nAna,28.2\n").unwrap();

        let ctx = CommandContext::new(AppConfig::default(), OutputFormat::Plain);
        let err = run(&ctx, &records, Some(&dir.path().join("none.csv"))).unwrap_err();
        assert!(err.to_string().contains("Threshold table unavailable"));
    }
}
