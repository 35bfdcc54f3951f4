//! Tier annotation of record batches

use anyhow::{bail, Result};
use athlete_insights_application::ClassificationEngine;
use athlete_insights_domain::record::RecordBatch;
use athlete_insights_infrastructure::{load_records, write_records, ReferenceData};
use std::path::Path;
use tracing::info;

use crate::commands::{print_warnings, CommandContext};
use crate::output::colors;

/// Validate a records file, add the `tier_number` column, and print or
/// write the result.
///
/// The batch must pass validation first. The sport filter only narrows the
/// output.
pub fn run(
    ctx: &CommandContext,
    records: &Path,
    catalog: Option<&Path>,
    sport: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let catalog = match ctx.catalog(catalog)? {
        ReferenceData::Loaded(catalog) => catalog,
        ReferenceData::Unavailable { reason } => bail!("Test catalog unavailable: {}", reason),
    };
    let batch = load_records(records)?;

    let engine = ClassificationEngine::builder()
        .config(ctx.engine_config())
        .catalog(catalog)
        .sports(ctx.sports(None)?.into_option())
        .build();

    let (annotated, report) = engine.validate_and_annotate(&batch)?;
    print_warnings(ctx, &report);

    let annotated = narrow(annotated, sport);
    info!(rows = annotated.len(), "Annotated records");

    match output {
        Some(path) => {
            write_records(path, &annotated)?;
            ctx.note(&colors::success(&format!("Wrote {} rows to {}", annotated.len(), path.display())).to_string());
            Ok(())
        }
        None => ctx.emit(&annotated),
    }
}

fn narrow(batch: RecordBatch, sport: Option<&str>) -> RecordBatch {
    match sport {
        Some(sport) => batch.filter_by_sport(sport),
        None => batch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use athlete_insights_common::AppConfig;
    use athlete_insights_domain::{record::TIER_NUMBER, value::CellValue};
    use athlete_insights_infrastructure::{load_records, write_records};
    use athlete_insights_testing::fixtures::create_test_batch;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = "Code,Test Name,Scoring Type,Tier 1,Tier 2,Tier 3,Tier 4\n\
        SPR10,10 Yard Sprint,Tiered,<=1.50,<=1.55,<=1.60,>1.60\n\
        CMJ,Countermovement Jump,Tiered,>=29,>=27,>=25,<25\n\
        OHS,Overhead Squat,Movement Quality,Optimal,Acceptable,Compensation,Pain\n\
        HIPB,Hip Balance,Calculated,Pain,Balanced,Outside Ideal,No Limitation\n";

    #[test]
    fn test_annotate_writes_tier_column() {
        let dir = TempDir::new().unwrap();
        let records = dir.path().join("records.csv");
        let catalog = dir.path().join("catalog.csv");
        let output = dir.path().join("annotated.csv");
        write_records(&records, &create_test_batch()).unwrap();
        fs::write(&catalog, CATALOG).unwrap();

        let ctx = CommandContext::new(AppConfig::default(), OutputFormat::Plain);
        run(&ctx, &records, Some(&catalog), Some("Soccer"), Some(&output)).unwrap();

        let annotated = load_records(&output).unwrap();
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated.cell(0, TIER_NUMBER), Some(&CellValue::from("3")));
        assert_eq!(annotated.cell(1, TIER_NUMBER), Some(&CellValue::from("2")));
    }

    #[test]
    fn test_annotate_numeric_labels_and_padded_codes_from_files() {
        let dir = TempDir::new().unwrap();
        let records = dir.path().join("records.csv");
        let catalog = dir.path().join("catalog.csv");
        let output = dir.path().join("annotated.csv");
        fs::write(
            &catalog,
            "Code,Test Name,Scoring Type,Tier 1,Tier 2,Tier 3,Tier 4\n\
             OHS,Overhead Squat,Movement Quality,3,2,1,0\n\
             007,Balance Reach,Calculated,Pain,Balanced,Outside Ideal,No Limitation\n",
        )
        .unwrap();
        fs::write(
            &records,
            "Athlete Name,Test Date,Sport,Test Name,Test Code,Value\n\
             Ana,2024-03-01,Soccer,Overhead Squat,OHS,3\n\
             Ben,2024-03-01,Soccer,Balance Reach,007,Outside Ideal\n",
        )
        .unwrap();

        let ctx = CommandContext::new(AppConfig::default(), OutputFormat::Plain);
        run(&ctx, &records, Some(&catalog), None, Some(&output)).unwrap();

        let annotated = load_records(&output).unwrap();
        assert_eq!(annotated.cell(0, TIER_NUMBER), Some(&CellValue::from("3")));
        assert_eq!(annotated.cell(1, TIER_NUMBER), Some(&CellValue::from("1")));
        assert_eq!(annotated.cell(1, "Test Code"), Some(&CellValue::from("007")));
    }

    #[test]
    fn test_annotate_requires_catalog() {
        let dir = TempDir::new().unwrap();
        let records = dir.path().join("records.csv");
        write_records(&records, &create_test_batch()).unwrap();

        let ctx = CommandContext::new(AppConfig::default(), OutputFormat::Plain);
        let err = run(&ctx, &records, Some(&dir.path().join("absent.csv")), None, None).unwrap_err();
        assert!(err.to_string().contains("Test catalog unavailable"));
    }
}
