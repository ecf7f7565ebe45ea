use thiserror::Error;

/// Errors from engine configuration.
///
/// The decision operations themselves are total and never fail; only
/// building or loading a configuration can.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid threshold {name}: {value} (must be finite and >= 0)")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("severity bands out of order: investigate={investigate}, retrain={retrain}, escalate={escalate}")]
    UnorderedBands {
        investigate: f64,
        retrain: f64,
        escalate: f64,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for EngineError {
    fn from(e: toml::de::Error) -> Self {
        EngineError::Config(e.to_string())
    }
}

/// Convenience type alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_threshold_display() {
        let e = EngineError::InvalidThreshold {
            name: "covariate_shift_min",
            value: -0.2,
        };
        let msg = e.to_string();
        assert!(msg.contains("covariate_shift_min"));
        assert!(msg.contains("-0.2"));
    }

    #[test]
    fn unordered_bands_display() {
        let e = EngineError::UnorderedBands {
            investigate: 0.5,
            retrain: 0.3,
            escalate: 0.9,
        };
        assert!(e.to_string().contains("retrain=0.3"));
    }

    #[test]
    fn toml_error_converts_to_config() {
        let err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let e: EngineError = err.into();
        assert!(matches!(e, EngineError::Config(_)));
    }
}
