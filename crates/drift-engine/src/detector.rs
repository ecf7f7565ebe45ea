//! Covariate and concept drift detectors.
//!
//! Both detectors are a primary threshold test guarded by a veto on the
//! other signal:
//!
//! | detector  | primary                    | veto                          |
//! |-----------|----------------------------|-------------------------------|
//! | covariate | `abs(input_shift) > 0.20`  | `abs(quality_change) > 0.05`  |
//! | concept   | `quality_drop > 0.10`      | `abs(input_shift) > 0.05`     |
//!
//! Inputs are evaluated literally. Nothing is clamped.

use tracing::debug;

use crate::config::DetectionThresholds;
use crate::types::{DetectionResult, DriftSignal, DriftType};

// ── Trait ────────────────────────────────────────────────────────────────

/// A drift detector that can be run against a summarized signal.
pub trait DriftDetector {
    /// Evaluate one signal.
    fn detect_signal(&self, signal: &DriftSignal) -> DetectionResult;

    /// The drift label this detector reports.
    fn drift_type(&self) -> DriftType;

    /// Name of the detector, used in logs.
    fn name(&self) -> &str;
}

// ── Covariate ───────────────────────────────────────────────────────────

/// Flags input-distribution shift that leaves output quality stable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CovariateDriftDetector {
    /// Shift magnitude must exceed this (strict).
    pub shift_min: f64,
    /// Quality magnitude must not exceed this (inclusive).
    pub quality_tolerance: f64,
}

impl CovariateDriftDetector {
    pub fn new(thresholds: &DetectionThresholds) -> Self {
        Self {
            shift_min: thresholds.covariate_shift_min,
            quality_tolerance: thresholds.covariate_quality_tolerance,
        }
    }

    /// `input_shift` and `quality_change` are signed fractions; direction is ignored.
    pub fn detect(&self, input_shift: f64, quality_change: f64) -> DetectionResult {
        let shifted = input_shift.abs() > self.shift_min;
        let quality_stable = quality_change.abs() <= self.quality_tolerance;
        let detected = shifted && quality_stable;

        debug!(
            input_shift,
            quality_change,
            shifted,
            quality_stable,
            detected,
            "covariate drift check"
        );

        if detected {
            DetectionResult::detected(DriftType::Covariate)
        } else {
            DetectionResult::clear()
        }
    }
}

impl Default for CovariateDriftDetector {
    fn default() -> Self {
        Self::new(&DetectionThresholds::default())
    }
}

impl DriftDetector for CovariateDriftDetector {
    fn detect_signal(&self, signal: &DriftSignal) -> DetectionResult {
        self.detect(signal.input_shift, signal.quality_change)
    }

    fn drift_type(&self) -> DriftType {
        DriftType::Covariate
    }

    fn name(&self) -> &str {
        "covariate"
    }
}

// ── Concept ─────────────────────────────────────────────────────────────

/// Flags quality degradation under a stable input distribution.
///
/// `quality_drop` is a degradation magnitude: positive means quality got
/// worse, negative means it improved. Use [`DriftSignal::quality_drop`] to
/// convert a signed quality change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConceptDriftDetector {
    /// Drop must exceed this (strict). Compared signed, never by magnitude.
    pub drop_min: f64,
    /// Input shift magnitude must not exceed this (inclusive).
    pub input_tolerance: f64,
}

impl ConceptDriftDetector {
    pub fn new(thresholds: &DetectionThresholds) -> Self {
        Self {
            drop_min: thresholds.concept_drop_min,
            input_tolerance: thresholds.concept_input_tolerance,
        }
    }

    pub fn detect(&self, quality_drop: f64, input_shift: f64) -> DetectionResult {
        let degraded = quality_drop > self.drop_min;
        let input_stable = input_shift.abs() <= self.input_tolerance;
        let detected = degraded && input_stable;

        debug!(
            quality_drop,
            input_shift,
            degraded,
            input_stable,
            detected,
            "concept drift check"
        );

        if detected {
            DetectionResult::detected(DriftType::Concept)
        } else {
            DetectionResult::clear()
        }
    }
}

impl Default for ConceptDriftDetector {
    fn default() -> Self {
        Self::new(&DetectionThresholds::default())
    }
}

impl DriftDetector for ConceptDriftDetector {
    fn detect_signal(&self, signal: &DriftSignal) -> DetectionResult {
        self.detect(signal.quality_drop(), signal.input_shift)
    }

    fn drift_type(&self) -> DriftType {
        DriftType::Concept
    }

    fn name(&self) -> &str {
        "concept"
    }
}
