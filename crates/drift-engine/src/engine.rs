//! The assessment pipeline: run all five components over one request.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::DriftClassifier;
use crate::config::EngineConfig;
use crate::detector::{ConceptDriftDetector, CovariateDriftDetector, DriftDetector};
use crate::error::EngineResult;
use crate::impact::ImpactCalculator;
use crate::response::ResponseRecommender;
use crate::types::{
    ActionRecommendation, DetectionResult, DriftSignal, DriftType, ImpactEstimate,
    ImpactParameters,
};

/// One monitoring window to assess.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub signal: DriftSignal,
    pub severity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactParameters>,
}

/// Everything the engine decided about one request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriftAssessment {
    pub signal: DriftSignal,
    pub covariate: DetectionResult,
    pub concept: DetectionResult,
    pub drift_type: DriftType,
    pub severity: f64,
    pub action: ActionRecommendation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactEstimate>,
}

/// Detectors, classifier, calculator, and recommender under one config.
///
/// Holds no state between calls; sharing one engine across threads is fine.
#[derive(Clone, Copy, Debug, Default)]
pub struct DriftEngine {
    config: EngineConfig,
    covariate: CovariateDriftDetector,
    concept: ConceptDriftDetector,
    classifier: DriftClassifier,
    impact: ImpactCalculator,
    recommender: ResponseRecommender,
}

impl DriftEngine {
    /// Build an engine without validating thresholds.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            covariate: CovariateDriftDetector::new(&config.detection),
            concept: ConceptDriftDetector::new(&config.detection),
            classifier: DriftClassifier,
            impact: ImpactCalculator::new(config.rounding),
            recommender: ResponseRecommender::new(config.severity),
        }
    }

    pub fn try_new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn covariate(&self) -> &CovariateDriftDetector {
        &self.covariate
    }

    pub fn concept(&self) -> &ConceptDriftDetector {
        &self.concept
    }

    pub fn classifier(&self) -> &DriftClassifier {
        &self.classifier
    }

    pub fn impact(&self) -> &ImpactCalculator {
        &self.impact
    }

    pub fn recommender(&self) -> &ResponseRecommender {
        &self.recommender
    }

    pub fn assess(&self, request: &AssessmentRequest) -> DriftAssessment {
        let covariate = self.covariate.detect_signal(&request.signal);
        let concept = self.concept.detect_signal(&request.signal);
        let drift_type = self.classifier.classify(covariate.detected, concept.detected);
        let action = self.recommender.recommend_for(drift_type, request.severity);
        let impact = request
            .impact
            .as_ref()
            .map(|p| self.impact.calculate_params(p));

        info!(
            drift_type = %drift_type,
            severity = request.severity,
            action = %action,
            financial_impact = impact.map(|i| i.financial_impact),
            "drift assessed"
        );

        DriftAssessment {
            signal: request.signal,
            covariate,
            concept,
            drift_type,
            severity: request.severity,
            action,
            impact,
        }
    }

    /// Assess each request independently, preserving order.
    pub fn assess_batch(&self, requests: &[AssessmentRequest]) -> Vec<DriftAssessment> {
        requests.iter().map(|r| self.assess(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeverityBands;
    use crate::error::EngineError;

    fn request(input_shift: f64, quality_change: f64, severity: f64) -> AssessmentRequest {
        AssessmentRequest {
            signal: DriftSignal::new(input_shift, quality_change),
            severity,
            impact: None,
        }
    }

    #[test]
    fn covariate_pipeline() {
        let a = DriftEngine::default().assess(&request(0.40, -0.01, 0.35));
        assert!(a.covariate.detected);
        assert!(!a.concept.detected);
        assert_eq!(a.drift_type, DriftType::Covariate);
        assert_eq!(a.action, ActionRecommendation::Investigate);
        assert!(a.impact.is_none());
    }

    #[test]
    fn concept_pipeline_uses_negated_quality_change() {
        let a = DriftEngine::default().assess(&request(0.0, -0.18, 0.6));
        assert!(!a.covariate.detected);
        assert!(a.concept.detected);
        assert_eq!(a.drift_type, DriftType::Concept);
        assert_eq!(a.action, ActionRecommendation::Retrain);
    }

    #[test]
    fn quality_improvement_is_not_concept_drift() {
        let a = DriftEngine::default().assess(&request(0.0, 0.25, 0.1));
        assert_eq!(a.drift_type, DriftType::None);
        assert_eq!(a.action, ActionRecommendation::Monitor);
    }

    #[test]
    fn both_only_reachable_with_overlapping_thresholds() {
        // Default vetoes make the two detectors mutually exclusive.
        let a = DriftEngine::default().assess(&request(0.3, -0.3, 0.95));
        assert_eq!(a.drift_type, DriftType::None);
        assert_eq!(a.action, ActionRecommendation::Escalate);

        let mut config = EngineConfig::default();
        config.detection.covariate_quality_tolerance = 1.0;
        config.detection.concept_input_tolerance = 1.0;
        let a = DriftEngine::new(config).assess(&request(0.3, -0.3, 0.95));
        assert_eq!(a.drift_type, DriftType::Both);
    }

    #[test]
    fn impact_attached_when_requested() {
        let mut req = request(0.3, 0.0, 0.5);
        req.impact = Some(ImpactParameters {
            daily_predictions: 10_000,
            days: 7.0,
            error_rate: 0.0001,
            cost_per_error: 50.0,
        });
        let impact = DriftEngine::default().assess(&req).impact.unwrap();
        assert!((impact.errors - 7.0).abs() < 1e-9);
        assert!((impact.financial_impact - 350.0).abs() < 1e-9);
    }

    #[test]
    fn batch_preserves_order() {
        let engine = DriftEngine::default();
        let reqs = [request(0.3, 0.0, 0.1), request(0.0, -0.2, 0.95), request(0.0, 0.0, 0.4)];
        let out = engine.assess_batch(&reqs);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].drift_type, DriftType::Covariate);
        assert_eq!(out[1].drift_type, DriftType::Concept);
        assert_eq!(out[2].drift_type, DriftType::None);
        assert_eq!(out[1].action, ActionRecommendation::Escalate);
    }

    #[test]
    fn try_new_rejects_bad_bands() {
        let config = EngineConfig {
            severity: SeverityBands {
                investigate: 0.9,
                retrain: 0.5,
                escalate: 0.3,
            },
            ..Default::default()
        };
        assert!(matches!(
            DriftEngine::try_new(config),
            Err(EngineError::UnorderedBands { .. })
        ));
    }

    #[test]
    fn assessment_json_shape() {
        let a = DriftEngine::default().assess(&request(0.4, 0.0, 0.2));
        let json = serde_json::to_value(a).unwrap();
        assert_eq!(json["drift_type"], "covariate");
        assert_eq!(json["action"], "MONITOR");
        assert_eq!(json["covariate"]["detected"], true);
        assert!(json.get("impact").is_none());
    }

    #[test]
    fn request_parses_without_impact() {
        let req: AssessmentRequest = serde_json::from_str(
            r#"{"signal": {"input_shift": 0.25, "quality_change": 0.01}, "severity": 0.4}"#,
        )
        .unwrap();
        assert!(req.impact.is_none());
        assert_eq!(req.signal.input_shift, 0.25);
    }
}
