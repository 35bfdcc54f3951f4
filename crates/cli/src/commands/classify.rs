//! Single value classification

use anyhow::{bail, Result};
use athlete_insights_application::ClassificationEngine;
use athlete_insights_domain::{tier::Classification, value::CellValue};
use athlete_insights_infrastructure::ReferenceData;
use serde::Serialize;
use std::path::Path;

use crate::commands::CommandContext;
use crate::output::{Formattable, JsonFormatter, TableFormatter};

/// What `classify` prints
#[derive(Debug, Serialize)]
pub struct ClassificationView {
    pub test_code: String,
    pub value: CellValue,
    #[serde(flatten)]
    pub classification: Classification,
    pub tier_number: Option<u8>,
}

impl ClassificationView {
    pub fn new(test_code: &str, value: CellValue, classification: Classification) -> Self {
        Self {
            test_code: test_code.to_string(),
            value,
            tier_number: classification.rank(),
            classification,
        }
    }

    fn outcome(&self) -> String {
        match self.classification {
            Classification::Matched(tier) => format!("{} (rank {})", tier, tier.rank()),
            Classification::Miss(reason) => format!("no tier: {}", reason),
        }
    }
}

impl Formattable for ClassificationView {
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    fn format_table(&self) -> Result<String> {
        TableFormatter::key_value(vec![
            ("Test Code", self.test_code.clone()),
            ("Value", self.value.to_string()),
            ("Tier", self.outcome()),
        ])
    }

    fn format_plain(&self) -> Result<String> {
        Ok(self.outcome())
    }
}

/// Classify one raw value against the catalog entry for `code`
pub fn run(ctx: &CommandContext, catalog: Option<&Path>, code: &str, value: &str) -> Result<()> {
    let catalog = match ctx.catalog(catalog)? {
        ReferenceData::Loaded(catalog) => catalog,
        ReferenceData::Unavailable { reason } => bail!("Test catalog unavailable: {}", reason),
    };
    let engine = ClassificationEngine::builder()
        .config(ctx.engine_config())
        .catalog(catalog)
        .build();

    let value = CellValue::from_raw(value);
    let classification = engine.classify(code, &value);
    ctx.emit(&ClassificationView::new(code, value, classification))
}
