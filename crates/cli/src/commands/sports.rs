//! Sports list maintenance

use anyhow::{bail, Context, Result};
use athlete_insights_domain::sports::SportsList;
use athlete_insights_infrastructure::{load_sports, write_sports, write_sports_to, ReferenceData};
use std::path::Path;
use tracing::info;

use crate::commands::CommandContext;
use crate::output::{colors, Formattable, JsonFormatter, TableFormatter};

impl Formattable for SportsList {
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    fn format_table(&self) -> Result<String> {
        let rows = self.names().iter().map(|name| vec![name.clone()]).collect();
        TableFormatter::simple(vec!["Name"], rows)
    }

    fn format_plain(&self) -> Result<String> {
        let mut out = Vec::new();
        write_sports_to(&mut out, self)?;
        Ok(String::from_utf8(out)?)
    }
}

/// Normalise a sports file: trimmed, validated, deduplicated and sorted.
///
/// Writes back to `output` when given, otherwise prints the result.
pub fn normalize(ctx: &CommandContext, input: &Path, output: Option<&Path>) -> Result<()> {
    let raw = match load_sports(input)? {
        ReferenceData::Loaded(list) => list,
        ReferenceData::Unavailable { reason } => bail!("Sports list unavailable: {}", reason),
    };
    let normalized = SportsList::normalized(raw.names().iter().cloned())
        .with_context(|| format!("Cannot normalise {}", input.display()))?;
    info!(before = raw.len(), after = normalized.len(), "Normalised sports list");

    match output {
        Some(path) => {
            write_sports(path, &normalized)?;
            ctx.note(&colors::success(&format!("Saved {} sports to {}", normalized.len(), path.display())).to_string());
            Ok(())
        }
        None => ctx.emit(&normalized),
    }
}
