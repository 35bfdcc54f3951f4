//! Configuration management for the application.
//!
//! Settings are layered from configuration files and environment variables.
//! Every section has defaults, so an empty environment yields a usable
//! configuration with no reference data paths set.
//!
//! ## Example Configuration
//!
//! ```toml
//! [reference]
//! catalog_path = "data/test_catalog.csv"
//! thresholds_path = "data/score_thresholds.csv"
//! sports_path = "data/sports.csv"
//!
//! [engine]
//! strict_conditions = true
//! parallel_row_threshold = 4096
//!
//! [telemetry]
//! log_level = "debug"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `ATHLETE_INSIGHTS__ENGINE__STRICT_CONDITIONS=true`
pub const ENV_PREFIX: &str = "ATHLETE_INSIGHTS";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Locations of the reference data files.
///
/// An unset path means that reference data is unavailable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub catalog_path: Option<PathBuf>,
    pub thresholds_path: Option<PathBuf>,
    pub sports_path: Option<PathBuf>,
}

/// Classification engine settings.
///
/// The same struct configures the engine facade and the record validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Report unparsable catalog conditions as validation warnings
    #[serde(default)]
    pub strict_conditions: bool,

    /// Row count from which per-row work runs in parallel
    #[serde(default = "default_parallel_row_threshold")]
    pub parallel_row_threshold: usize,

    /// Warn about test dates that do not parse
    #[serde(default = "default_check_test_dates")]
    pub check_test_dates: bool,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_parallel_row_threshold() -> usize {
    2048
}

fn default_check_test_dates() -> bool {
    true
}

fn default_service_name() -> String {
    "athlete-insights".to_string()
}

fn default_json_logging() -> bool {
    false
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            strict_conditions: false,
            parallel_row_threshold: default_parallel_row_threshold(),
            check_test_dates: default_check_test_dates(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: default_json_logging(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// Sources, later overriding earlier:
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/{environment}.toml (if exists, where environment is from APP_ENV)
    /// 4. Environment variables prefixed with `ATHLETE_INSIGHTS__`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use athlete_insights_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Strict conditions: {}", config.engine.strict_conditions);
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Like [`AppConfig::load`], with an explicit file layered after the
    /// environment-specific one.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            // Example: ATHLETE_INSIGHTS__ENGINE__PARALLEL_ROW_THRESHOLD=512
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.telemetry.service_name.trim().is_empty() {
            anyhow::bail!("Telemetry service name must not be empty");
        }

        if !LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                LOG_LEVELS.join(", ")
            );
        }

        if self.engine.parallel_row_threshold == 0 {
            anyhow::bail!("Parallel row threshold must be greater than 0");
        }

        Ok(())
    }

    /// Pretty JSON rendering for display
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
