use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Summarized drift signal for one monitoring window.
///
/// Both fields are signed fractions: `0.21` is a 21% increase. A negative
/// `quality_change` is a degradation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftSignal {
    pub input_shift: f64,
    pub quality_change: f64,
}

impl DriftSignal {
    pub fn new(input_shift: f64, quality_change: f64) -> Self {
        Self {
            input_shift,
            quality_change,
        }
    }

    /// Degradation magnitude: positive when quality got worse.
    pub fn quality_drop(&self) -> f64 {
        -self.quality_change
    }
}

/// Kind of drift observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftType {
    /// Inputs moved, quality held.
    Covariate,
    /// Quality degraded, inputs held.
    Concept,
    Both,
    None,
}

impl DriftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Covariate => "covariate",
            Self::Concept => "concept",
            Self::Both => "both",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DriftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known drift type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown drift type: {0}")]
pub struct UnknownDriftType(pub String);

impl FromStr for DriftType {
    type Err = UnknownDriftType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "covariate" => Ok(Self::Covariate),
            "concept" => Ok(Self::Concept),
            "both" => Ok(Self::Both),
            "none" => Ok(Self::None),
            _ => Err(UnknownDriftType(s.to_string())),
        }
    }
}

/// Outcome of a single detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub detected: bool,
    /// Label of the drift this detector looks for, present only when detected.
    pub drift: Option<DriftType>,
}

impl DetectionResult {
    pub fn detected(drift: DriftType) -> Self {
        Self {
            detected: true,
            drift: Some(drift),
        }
    }

    pub fn clear() -> Self {
        Self {
            detected: false,
            drift: None,
        }
    }
}

/// Pair of detector flags fed to the classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationInput {
    pub input_shifted: bool,
    pub quality_dropped: bool,
}

/// Classifier output, serialized as `{"type": "..."}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub drift_type: DriftType,
}

/// Exposure parameters for an impact estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    pub daily_predictions: u64,
    /// Length of the blind period; fractional days are allowed.
    pub days: f64,
    pub error_rate: f64,
    pub cost_per_error: f64,
}

/// Business impact of undetected drift.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub predictions_affected: f64,
    pub errors: f64,
    pub financial_impact: f64,
}

/// How `predictions_affected` is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// Report the exact product.
    #[default]
    Exact,
    /// Round half away from zero.
    Round,
    /// Drop the fractional part.
    Truncate,
}

impl RoundingPolicy {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Exact => value,
            Self::Round => value.round(),
            Self::Truncate => value.trunc(),
        }
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "round" => Ok(Self::Round),
            "truncate" => Ok(Self::Truncate),
            other => Err(format!("unknown rounding policy: {other}")),
        }
    }
}

/// Recommender input. `drift_type` is free-form; unrecognized values are fine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeverityInput {
    pub drift_type: String,
    pub severity: f64,
}

/// Operational response to drift, ordered by escalation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionRecommendation {
    Monitor,
    Investigate,
    Retrain,
    Escalate,
}

impl ActionRecommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monitor => "MONITOR",
            Self::Investigate => "INVESTIGATE",
            Self::Retrain => "RETRAIN",
            Self::Escalate => "ESCALATE",
        }
    }
}

impl fmt::Display for ActionRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
