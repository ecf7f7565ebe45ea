//! driftctl - command-line interface for the drift engine
//!
//! Evaluates already-summarized drift signals from the terminal:
//! - Run the covariate and concept detectors
//! - Classify detector flags into a drift type
//! - Estimate the business impact of a blind period
//! - Recommend a response action for a severity score
//! - Assess full requests read as JSON from a file or stdin

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drift_engine::{DriftEngine, ImpactParameters, RoundingPolicy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{assess, detect, impact, respond};
use error::CliResult;

/// driftctl application
#[derive(Parser)]
#[command(name = "driftctl")]
#[command(about = "Drift engine - detect, classify, and respond to model drift", long_about = None)]
#[command(version)]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(short, long, env = "DRIFT_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Check for covariate drift (input shift with stable quality)
    Covariate {
        /// Signed fractional input shift (0.21 = 21%)
        #[arg(long, allow_negative_numbers = true)]
        input_shift: f64,

        /// Signed fractional quality change (negative = degradation)
        #[arg(long, allow_negative_numbers = true)]
        quality_change: f64,
    },

    /// Check for concept drift (quality drop with stable input)
    Concept {
        /// Degradation magnitude, positive when quality got worse
        #[arg(long, allow_negative_numbers = true)]
        quality_drop: f64,

        /// Signed fractional input shift
        #[arg(long, allow_negative_numbers = true)]
        input_shift: f64,
    },

    /// Classify detector flags into a drift type
    Classify {
        /// Input distribution shifted
        #[arg(long)]
        input_shifted: bool,

        /// Output quality dropped
        #[arg(long)]
        quality_dropped: bool,
    },

    /// Estimate affected predictions, errors, and cost
    Impact {
        #[arg(long)]
        daily_predictions: u64,

        /// Blind period in days (fractional allowed)
        #[arg(long)]
        days: f64,

        #[arg(long)]
        error_rate: f64,

        #[arg(long)]
        cost_per_error: f64,

        /// Rounding for predictions_affected (exact, round, truncate)
        #[arg(long)]
        rounding: Option<RoundingPolicy>,
    },

    /// Recommend a response action for a severity score
    #[command(alias = "action")]
    Respond {
        /// Drift type label (any value is accepted)
        #[arg(long, default_value = "none")]
        drift_type: String,

        #[arg(long, allow_negative_numbers = true)]
        severity: f64,
    },

    /// Assess one request or an array of requests (JSON)
    Assess {
        /// Request file; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the effective engine configuration
    Config,
}

fn main() {
    if let Err(e) = run() {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let engine = DriftEngine::new(config::load(cli.config.as_deref())?);
    let format = cli.output;

    match cli.command {
        Commands::Covariate {
            input_shift,
            quality_change,
        } => detect::covariate(&engine, input_shift, quality_change, format),
        Commands::Concept {
            quality_drop,
            input_shift,
        } => detect::concept(&engine, quality_drop, input_shift, format),
        Commands::Classify {
            input_shifted,
            quality_dropped,
        } => detect::classify(&engine, input_shifted, quality_dropped, format),
        Commands::Impact {
            daily_predictions,
            days,
            error_rate,
            cost_per_error,
            rounding,
        } => impact::execute(
            engine.impact(),
            ImpactParameters {
                daily_predictions,
                days,
                error_rate,
                cost_per_error,
            },
            rounding,
            format,
        ),
        Commands::Respond {
            drift_type,
            severity,
        } => respond::execute(engine.recommender(), &drift_type, severity, format),
        Commands::Assess { file } => assess::execute(&engine, file.as_deref(), format),
        Commands::Config => {
            println!("{}", engine.config().to_toml_string()?);
            Ok(())
        }
    }
}
