//! Engine configuration: detection thresholds, severity bands, rounding.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::types::RoundingPolicy;

/// Thresholds for the two detectors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionThresholds {
    /// Input shift magnitude must exceed this for covariate drift (strict).
    pub covariate_shift_min: f64,
    /// Quality movement allowed under covariate drift (inclusive).
    pub covariate_quality_tolerance: f64,
    /// Quality drop must exceed this for concept drift (strict).
    pub concept_drop_min: f64,
    /// Input shift allowed under concept drift (inclusive).
    pub concept_input_tolerance: f64,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            covariate_shift_min: 0.20,
            covariate_quality_tolerance: 0.05,
            concept_drop_min: 0.10,
            concept_input_tolerance: 0.05,
        }
    }
}

impl DetectionThresholds {
    pub fn validate(&self) -> EngineResult<()> {
        check("covariate_shift_min", self.covariate_shift_min)?;
        check("covariate_quality_tolerance", self.covariate_quality_tolerance)?;
        check("concept_drop_min", self.concept_drop_min)?;
        check("concept_input_tolerance", self.concept_input_tolerance)
    }
}

/// Lower bounds (inclusive) of the severity bands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityBands {
    pub investigate: f64,
    pub retrain: f64,
    pub escalate: f64,
}

impl Default for SeverityBands {
    fn default() -> Self {
        Self {
            investigate: 0.30,
            retrain: 0.50,
            escalate: 0.90,
        }
    }
}

impl SeverityBands {
    pub fn validate(&self) -> EngineResult<()> {
        check("investigate", self.investigate)?;
        check("retrain", self.retrain)?;
        check("escalate", self.escalate)?;
        if self.investigate < self.retrain && self.retrain < self.escalate {
            Ok(())
        } else {
            Err(EngineError::UnorderedBands {
                investigate: self.investigate,
                retrain: self.retrain,
                escalate: self.escalate,
            })
        }
    }
}

/// Full engine configuration.
///
/// Every section falls back to its defaults, so an empty TOML document is a
/// valid configuration:
///
/// ```toml
/// rounding = "truncate"
///
/// [detection]
/// covariate_shift_min = 0.25
///
/// [severity]
/// escalate = 0.95
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rounding: RoundingPolicy,
    pub detection: DetectionThresholds,
    pub severity: SeverityBands,
}

impl EngineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        self.detection.validate()?;
        self.severity.validate()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejecting engine config");
            return Err(e);
        }
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> EngineResult<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::Config(e.to_string()))
    }
}

fn check(name: &'static str, value: f64) -> EngineResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let c = EngineConfig::default();
        assert_eq!(c.detection.covariate_shift_min, 0.20);
        assert_eq!(c.detection.covariate_quality_tolerance, 0.05);
        assert_eq!(c.detection.concept_drop_min, 0.10);
        assert_eq!(c.detection.concept_input_tolerance, 0.05);
        assert_eq!(c.severity.investigate, 0.30);
        assert_eq!(c.severity.retrain, 0.50);
        assert_eq!(c.severity.escalate, 0.90);
        assert_eq!(c.rounding, RoundingPolicy::Exact);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        let c = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(c, EngineConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let c = EngineConfig::from_toml_str(
            r#"
            rounding = "round"

            [detection]
            covariate_shift_min = 0.25

            [severity]
            escalate = 0.95
            "#,
        )
        .unwrap();
        assert_eq!(c.detection.covariate_shift_min, 0.25);
        assert_eq!(c.detection.concept_drop_min, 0.10);
        assert_eq!(c.severity.escalate, 0.95);
        assert_eq!(c.severity.retrain, 0.50);
        assert_eq!(c.rounding, RoundingPolicy::Round);
    }

    #[test]
    fn negative_threshold_rejected() {
        let err = EngineConfig::from_toml_str("[detection]\nconcept_drop_min = -0.1\n").unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidThreshold {
                name: "concept_drop_min",
                ..
            }
        ));
    }

    #[test]
    fn unordered_bands_rejected() {
        let bands = SeverityBands {
            investigate: 0.6,
            retrain: 0.5,
            escalate: 0.9,
        };
        assert!(matches!(bands.validate(), Err(EngineError::UnorderedBands { .. })));

        let equal = SeverityBands {
            investigate: 0.5,
            retrain: 0.5,
            escalate: 0.9,
        };
        assert!(equal.validate().is_err());
    }

    #[test]
    fn nan_threshold_rejected() {
        let t = DetectionThresholds {
            covariate_shift_min: f64::NAN,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = EngineConfig::from_toml_str("[detection\n").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drift.toml");
        std::fs::write(&path, "[severity]\ninvestigate = 0.25\n").unwrap();
        let c = EngineConfig::load(&path).unwrap();
        assert_eq!(c.severity.investigate, 0.25);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = EngineConfig::load("/nonexistent/drift.toml").unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn toml_round_trip() {
        let c = EngineConfig {
            rounding: RoundingPolicy::Truncate,
            ..Default::default()
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), c);
    }
}
