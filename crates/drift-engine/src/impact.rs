use tracing::debug;

use crate::types::{ImpactEstimate, ImpactParameters, RoundingPolicy};

/// Estimates the cost of running a drifted model for a blind period.
///
/// Arithmetic is `f64` end to end. The rounding policy touches only the
/// reported `predictions_affected`; `errors` and `financial_impact` always
/// come from the exact product.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactCalculator {
    pub rounding: RoundingPolicy,
}

impl ImpactCalculator {
    pub fn new(rounding: RoundingPolicy) -> Self {
        Self { rounding }
    }

    pub fn calculate(
        &self,
        daily_predictions: u64,
        days: f64,
        error_rate: f64,
        cost_per_error: f64,
    ) -> ImpactEstimate {
        let predictions = daily_predictions as f64 * days;
        let errors = predictions * error_rate;
        let financial_impact = errors * cost_per_error;

        debug!(
            daily_predictions,
            days,
            error_rate,
            cost_per_error,
            predictions,
            errors,
            financial_impact,
            "drift impact"
        );

        ImpactEstimate {
            predictions_affected: self.rounding.apply(predictions),
            errors,
            financial_impact,
        }
    }

    pub fn calculate_params(&self, params: &ImpactParameters) -> ImpactEstimate {
        self.calculate(
            params.daily_predictions,
            params.days,
            params.error_rate,
            params.cost_per_error,
        )
    }
}
