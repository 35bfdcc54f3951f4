//! Common utilities shared by the Athlete Insights crates.
//!
//! This crate provides:
//! - Configuration management
//! - Logging setup
//! - Test date parsing

pub mod config;
pub mod datetime;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, EngineSettings, ReferenceConfig, TelemetryConfig};
pub use datetime::{format_test_date, parse_test_date};
pub use telemetry::{init_from_config, init_tracing};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
