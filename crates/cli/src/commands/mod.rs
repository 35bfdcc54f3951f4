//! CLI commands

pub mod annotate;
pub mod classify;
pub mod config;
pub mod score;
pub mod sports;
pub mod thresholds;
pub mod validate;

pub use crate::context::CommandContext;

use crate::output::colors;
use athlete_insights_domain::validation::ValidationReport;

/// Print report warnings to stderr
pub(crate) fn print_warnings(ctx: &CommandContext, report: &ValidationReport) {
    for warning in &report.warnings {
        ctx.note(&format!("{} {}", colors::warning("warning:"), warning.message));
    }
}
