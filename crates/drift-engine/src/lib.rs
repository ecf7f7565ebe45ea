#![deny(unsafe_code)]
//! # drift-engine
//!
//! Deterministic drift decisions for a deployed predictive model.
//!
//! The engine takes drift signals that were already summarized upstream
//! (signed fractional input shift and quality change) and applies fixed
//! threshold rules:
//!
//! ```text
//!   DriftSignal ──┬── CovariateDriftDetector ──┐
//!                 │                            ├── DriftClassifier ── DriftType
//!                 └── ConceptDriftDetector ────┘
//!
//!   ImpactParameters ── ImpactCalculator ── ImpactEstimate
//!   (drift type, severity) ── ResponseRecommender ── ActionRecommendation
//! ```
//!
//! Every component is pure: no I/O, no interior state, and identical inputs
//! always produce identical outputs. The free functions below are the
//! call-level contract and use the default thresholds; [`DriftEngine`] runs
//! the whole chain under a custom [`EngineConfig`].
//!
//! ## Quick Start
//!
//! ```rust
//! use drift_engine::{
//!     calculate_drift_impact, classify_drift, detect_concept_drift, detect_covariate_drift,
//!     determine_response_action, ActionRecommendation, DriftType,
//! };
//!
//! let covariate = detect_covariate_drift(0.40, -0.01);
//! let concept = detect_concept_drift(0.01, 0.40);
//! let class = classify_drift(covariate.detected, concept.detected);
//! assert_eq!(class.drift_type, DriftType::Covariate);
//!
//! let impact = calculate_drift_impact(10_000, 7.0, 0.0001, 50.0);
//! assert!((impact.errors - 7.0).abs() < 1e-9);
//!
//! assert_eq!(determine_response_action("unknown", 0.45), ActionRecommendation::Investigate);
//! ```

pub mod classifier;
pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod impact;
pub mod response;
pub mod types;

pub use classifier::DriftClassifier;
pub use config::{DetectionThresholds, EngineConfig, SeverityBands};
pub use detector::{ConceptDriftDetector, CovariateDriftDetector, DriftDetector};
pub use engine::{AssessmentRequest, DriftAssessment, DriftEngine};
pub use error::{EngineError, EngineResult};
pub use impact::ImpactCalculator;
pub use response::ResponseRecommender;
pub use types::{
    ActionRecommendation, Classification, ClassificationInput, DetectionResult, DriftSignal,
    DriftType, ImpactEstimate, ImpactParameters, RoundingPolicy, SeverityInput,
    UnknownDriftType,
};

/// Covariate drift: `abs(input_shift) > 0.20` and `abs(quality_change) <= 0.05`.
pub fn detect_covariate_drift(input_shift: f64, quality_change: f64) -> DetectionResult {
    CovariateDriftDetector::default().detect(input_shift, quality_change)
}

/// Concept drift: `quality_drop > 0.10` and `abs(input_shift) <= 0.05`.
///
/// `quality_drop` is positive for degradation (the negated quality change).
pub fn detect_concept_drift(quality_drop: f64, input_shift: f64) -> DetectionResult {
    ConceptDriftDetector::default().detect(quality_drop, input_shift)
}

pub fn classify_drift(input_shifted: bool, quality_dropped: bool) -> Classification {
    Classification {
        drift_type: DriftClassifier.classify(input_shifted, quality_dropped),
    }
}

/// Affected predictions, errors, and cost over a blind period, with no rounding.
pub fn calculate_drift_impact(
    daily_predictions: u64,
    days: f64,
    error_rate: f64,
    cost_per_error: f64,
) -> ImpactEstimate {
    ImpactCalculator::default().calculate(daily_predictions, days, error_rate, cost_per_error)
}

/// Action for a severity score; `drift_type` is accepted but never changes the answer.
pub fn determine_response_action(drift_type: &str, severity: f64) -> ActionRecommendation {
    ResponseRecommender::default().recommend(drift_type, severity)
}
