//! CLI error types

use drift_engine::EngineError;
use thiserror::Error;

/// Errors surfaced by `driftctl`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_wraps() {
        let e: CliError = EngineError::Config("bad".into()).into();
        assert!(e.to_string().contains("bad"));
    }

    #[test]
    fn json_error_display() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: CliError = err.into();
        assert!(e.to_string().starts_with("invalid request JSON"));
    }
}
