//! Impact estimate command

use crate::error::CliResult;
use crate::output::{print_single, FieldRow, OutputFormat};
use drift_engine::{ImpactCalculator, ImpactParameters, RoundingPolicy};

/// Estimate drift impact. `rounding` overrides the configured policy.
pub fn execute(
    calculator: &ImpactCalculator,
    params: ImpactParameters,
    rounding: Option<RoundingPolicy>,
    format: OutputFormat,
) -> CliResult<()> {
    let calculator = match rounding {
        Some(policy) => ImpactCalculator::new(policy),
        None => *calculator,
    };
    let estimate = calculator.calculate_params(&params);

    let rows = vec![
        FieldRow::new("predictions_affected", estimate.predictions_affected),
        FieldRow::new("errors", estimate.errors),
        FieldRow::new("financial_impact", format!("{:.2}", estimate.financial_impact)),
    ];
    print_single(&estimate, rows, format)
}
