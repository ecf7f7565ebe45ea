//! CLI configuration

use crate::error::{CliError, CliResult};
use drift_engine::EngineConfig;
use std::path::PathBuf;

/// Load the engine configuration.
///
/// An explicit path must exist. Without one, the default location
/// (`<config_dir>/drift/config.toml`) is tried and defaults are used when
/// the file is absent.
pub fn load(path: Option<&str>) -> CliResult<EngineConfig> {
    let config_path = match path {
        Some(p) => PathBuf::from(p),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(EngineConfig::default()),
        },
    };

    if !config_path.exists() {
        return Err(CliError::Config(format!(
            "config file not found: {}",
            config_path.display()
        )));
    }

    tracing::debug!(path = %config_path.display(), "loading engine config");
    Ok(EngineConfig::load(&config_path)?)
}

/// Get the default configuration file path
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("drift").join("config.toml"))
}
