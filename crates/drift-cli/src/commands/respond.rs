//! Response action command

use crate::error::CliResult;
use crate::output::{colorize_action, print_single, FieldRow, OutputFormat};
use drift_engine::ResponseRecommender;

pub fn execute(
    recommender: &ResponseRecommender,
    drift_type: &str,
    severity: f64,
    format: OutputFormat,
) -> CliResult<()> {
    let action = recommender.recommend(drift_type, severity);
    let rows = vec![
        FieldRow::new("drift_type", drift_type),
        FieldRow::new("severity", severity),
        FieldRow::new("action", colorize_action(action)),
    ];
    print_single(&action, rows, format)
}
