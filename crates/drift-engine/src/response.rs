use tracing::debug;

use crate::config::SeverityBands;
use crate::types::{ActionRecommendation, DriftType, SeverityInput};

/// Maps drift severity to an operational action.
///
/// Bands are half-open with inclusive lower bounds:
/// `[.., 0.30)` monitor, `[0.30, 0.50)` investigate, `[0.50, 0.90)` retrain,
/// `[0.90, ..)` escalate. The drift type is logged but never changes the
/// outcome. `NaN` fails every comparison and lands on monitor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResponseRecommender {
    pub bands: SeverityBands,
}

impl ResponseRecommender {
    pub fn new(bands: SeverityBands) -> Self {
        Self { bands }
    }

    /// `drift_type` may be any string, including ones no detector emits.
    pub fn recommend(&self, drift_type: &str, severity: f64) -> ActionRecommendation {
        let action = self.action_for(severity);
        debug!(drift_type, severity, action = %action, "response action");
        action
    }

    pub fn recommend_for(&self, drift_type: DriftType, severity: f64) -> ActionRecommendation {
        self.recommend(drift_type.as_str(), severity)
    }

    pub fn recommend_input(&self, input: &SeverityInput) -> ActionRecommendation {
        self.recommend(&input.drift_type, input.severity)
    }

    fn action_for(&self, severity: f64) -> ActionRecommendation {
        if severity >= self.bands.escalate {
            ActionRecommendation::Escalate
        } else if severity >= self.bands.retrain {
            ActionRecommendation::Retrain
        } else if severity >= self.bands.investigate {
            ActionRecommendation::Investigate
        } else {
            ActionRecommendation::Monitor
        }
    }
}
