//! Athlete Insights CLI Library
//!
//! Command implementations, shared command context and output formatting
//! for the `athlete-insights` binary.

pub mod commands;
pub mod context;
pub mod output;

pub use context::CommandContext;
pub use output::{Formattable, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
