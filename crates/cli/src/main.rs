//! Athlete Insights CLI
//!
//! Validate athlete test records, classify values into performance tiers and
//! score wide metric tables from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use athlete_insights_cli::commands::{
    annotate, classify, config, score, sports, thresholds, validate,
};
use athlete_insights_cli::output::OutputFormat;
use athlete_insights_cli::CommandContext;
use athlete_insights_common::{init_from_config, AppConfig};

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "athlete-insights")]
#[command(author, version, about = "Athlete fitness-test classification and validation")]
#[command(long_about = "Threshold classification and record validation for athlete fitness tests.\n\n\
    Validate record files against a test catalog and sports list, annotate records with \
    performance tiers, and score wide metric tables against quality thresholds.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Configuration file layered over config/default.toml
    #[arg(long, global = true, env = "ATHLETE_INSIGHTS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a records file; exits with status 1 when it fails
    #[command(alias = "v")]
    Validate {
        /// Records CSV file
        #[arg(short, long)]
        records: PathBuf,

        /// Test catalog CSV file (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Sports list CSV file (overrides config)
        #[arg(short, long)]
        sports: Option<PathBuf>,

        /// Also warn about catalog conditions that never match
        #[arg(long)]
        strict: bool,
    },

    /// Add the tier_number column to a records file
    #[command(alias = "a")]
    Annotate {
        /// Records CSV file
        #[arg(short, long)]
        records: PathBuf,

        /// Test catalog CSV file (overrides config)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Only output rows for this sport
        #[arg(long)]
        sport: Option<String>,

        /// Output file path (prints to stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Classify a single value for a test code
    #[command(alias = "c")]
    Classify {
        /// Test catalog CSV file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Test code
        #[arg(long)]
        code: String,

        /// Raw value, numeric or label
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// Append {metric}_Score columns to a wide metrics file
    Score {
        /// Records CSV file with one column per metric
        #[arg(short, long)]
        records: PathBuf,

        /// Threshold CSV file replacing the built-in table
        #[arg(short, long)]
        thresholds: Option<PathBuf>,
    },

    /// Print or export the built-in threshold table
    Thresholds {
        /// Output file path (prints to stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Sports list commands
    Sports {
        #[command(subcommand)]
        command: SportsCommands,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum SportsCommands {
    /// Trim, validate, deduplicate and sort a sports list file
    Normalize {
        /// Sports list CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (prints to stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "athlete-insights", &mut std::io::stdout());
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle completions command early (doesn't need config)
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(ExitCode::SUCCESS);
    }

    let config = AppConfig::load_from(cli.config.as_deref())?;

    let mut telemetry = config.telemetry.clone();
    if cli.verbose {
        telemetry.log_level = "debug".to_string();
    }
    init_from_config(&telemetry)?;

    let ctx = CommandContext::new(config, cli.format.into());

    match cli.command {
        Commands::Validate {
            records,
            catalog,
            sports,
            strict,
        } => {
            let passed = validate::run(&ctx, &records, catalog.as_deref(), sports.as_deref(), strict)?;
            if !passed {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Annotate {
            records,
            catalog,
            sport,
            output,
        } => annotate::run(
            &ctx,
            &records,
            catalog.as_deref(),
            sport.as_deref(),
            output.as_deref(),
        )?,

        Commands::Classify { catalog, code, value } => {
            classify::run(&ctx, catalog.as_deref(), &code, &value)?
        }

        Commands::Score { records, thresholds } => score::run(&ctx, &records, thresholds.as_deref())?,

        Commands::Thresholds { output } => thresholds::run(&ctx, output.as_deref())?,

        Commands::Sports { command } => match command {
            SportsCommands::Normalize { input, output } => {
                sports::normalize(&ctx, &input, output.as_deref())?
            }
        },

        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => config::show(&ctx)?,
        },

        Commands::Completions { .. } => {
            // Already handled above
        }
    }

    Ok(ExitCode::SUCCESS)
}
