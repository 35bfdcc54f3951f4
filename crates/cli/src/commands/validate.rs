//! Record batch validation

use anyhow::Result;
use athlete_insights_application::ClassificationEngine;
use athlete_insights_infrastructure::load_records;
use std::path::Path;
use tracing::info;

use crate::commands::CommandContext;

/// Validate a records file and print the report.
///
/// Returns whether the batch passed. Unavailable reference data only skips
/// the matching check.
pub fn run(
    ctx: &CommandContext,
    records: &Path,
    catalog: Option<&Path>,
    sports: Option<&Path>,
    strict: bool,
) -> Result<bool> {
    let batch = load_records(records)?;
    let catalog = ctx.catalog(catalog)?;
    let sports = ctx.sports(sports)?;

    let engine = ClassificationEngine::builder()
        .config(ctx.engine_config())
        .strict_conditions(strict || ctx.config.engine.strict_conditions)
        .catalog(catalog.into_option())
        .sports(sports.into_option())
        .build();

    let report = engine.validate(&batch);
    info!(
        rows = batch.len(),
        passed = report.passed,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validated records"
    );

    ctx.emit(&report)?;
    Ok(report.passed)
}
