//! Shared state for command execution

use anyhow::Result;
use athlete_insights_common::{AppConfig, EngineSettings};
use athlete_insights_domain::{catalog::TestCatalog, sports::SportsList, thresholds::ThresholdTable};
use athlete_insights_infrastructure::{load_catalog, load_sports, load_thresholds, ReferenceData};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output::{colors, Formattable, OutputFormat};

/// Context passed to all commands
pub struct CommandContext {
    pub config: AppConfig,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn new(config: AppConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// Engine settings from the loaded configuration
    pub fn engine_config(&self) -> EngineSettings {
        self.config.engine.clone()
    }

    /// Catalog from the flag, else the configured path
    pub fn catalog(&self, flag: Option<&Path>) -> Result<ReferenceData<TestCatalog>> {
        match resolve(flag, &self.config.reference.catalog_path) {
            Some(path) => Ok(load_catalog(&path)?),
            None => Ok(ReferenceData::unavailable("no catalog file configured")),
        }
    }

    /// Sports list from the flag, else the configured path
    pub fn sports(&self, flag: Option<&Path>) -> Result<ReferenceData<SportsList>> {
        match resolve(flag, &self.config.reference.sports_path) {
            Some(path) => Ok(load_sports(&path)?),
            None => Ok(ReferenceData::unavailable("no sports file configured")),
        }
    }

    /// Custom threshold table from the flag, else the configured path
    pub fn thresholds(&self, flag: Option<&Path>) -> Result<ReferenceData<ThresholdTable>> {
        match resolve(flag, &self.config.reference.thresholds_path) {
            Some(path) => Ok(load_thresholds(&path)?),
            None => Ok(ReferenceData::unavailable("no threshold file configured")),
        }
    }

    /// Print a value to stdout in the selected format
    pub fn emit<T: Formattable + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", value.format(self.format)?);
        Ok(())
    }

    /// Human-facing note on stderr; suppressed for JSON output
    pub fn note(&self, message: &str) {
        if self.format != OutputFormat::Json {
            eprintln!("{}", colors::dim(message));
        }
    }
}

fn resolve(flag: Option<&Path>, configured: &Option<PathBuf>) -> Option<PathBuf> {
    let path = flag.map(Path::to_path_buf).or_else(|| configured.clone());
    debug!(path = ?path, "Resolved reference path");
    path
}
