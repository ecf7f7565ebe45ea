//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use drift_engine::ActionRecommendation;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// One `field | value` line of a table.
#[derive(Debug, Clone, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "FIELD")]
    pub field: String,
    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &str, value: impl ToString) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Render a value: `rows` for tables, serde for JSON and YAML.
pub fn render<T: Serialize>(data: &T, rows: Vec<FieldRow>, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
    })
}

/// Print a single item in the specified format
pub fn print_single<T: Serialize>(data: &T, rows: Vec<FieldRow>, format: OutputFormat) -> CliResult<()> {
    println!("{}", render(data, rows, format)?);
    Ok(())
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Color an action by urgency.
pub fn colorize_action(action: ActionRecommendation) -> ColoredString {
    match action {
        ActionRecommendation::Monitor => action.as_str().green(),
        ActionRecommendation::Investigate => action.as_str().yellow(),
        ActionRecommendation::Retrain => action.as_str().magenta(),
        ActionRecommendation::Escalate => action.as_str().red().bold(),
    }
}

/// Check or cross for a detection flag.
pub fn flag(detected: bool) -> String {
    if detected {
        format!("{} yes", "✓".green())
    } else {
        format!("{} no", "✗".dimmed())
    }
}
