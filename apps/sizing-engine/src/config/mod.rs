//! Configuration module for the sizing engine.
//!
//! Loads request defaults and logging settings from YAML, with environment
//! variable interpolation and validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sizing_engine::config::{load_config, load_default_config};
//!
//! // SIZING_ENGINE_CONFIG, then config.yaml, then built-in defaults
//! let config = load_default_config()?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("default leverage: {}", config.sizing.default_leverage);
//! ```

mod observability;
mod pyramid;
mod sizing;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use pyramid::PyramidConfig;
pub use sizing::SizingConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "SIZING_ENGINE_CONFIG";

/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure. Every section is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Sizing request defaults.
    #[serde(default)]
    pub sizing: SizingConfig,
    /// Pyramid request defaults.
    #[serde(default)]
    pub pyramid: PyramidConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Resolve and load the configuration the binary runs with.
///
/// An explicit `SIZING_ENGINE_CONFIG` must point at a readable file. Without
/// it, `config.yaml` is used if present and built-in defaults otherwise.
///
/// # Errors
///
/// Returns a `ConfigError` if the selected file cannot be read, parsed, or
/// validated.
pub fn load_default_config() -> Result<Config, ConfigError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_config(Some(&path)),
        _ if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None),
        _ => Ok(Config::default()),
    }
}

/// Load configuration from a YAML string (useful for testing).
///
/// An empty document yields the built-in defaults.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let hundred = Decimal::ONE_HUNDRED;

    let risk = config.sizing.default_risk_percent;
    if risk <= Decimal::ZERO || risk > hundred {
        return Err(ConfigError::ValidationError(format!(
            "sizing.default_risk_percent must be in (0, 100], got {risk}"
        )));
    }

    if config.sizing.default_leverage <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(format!(
            "sizing.default_leverage must be positive, got {}",
            config.sizing.default_leverage
        )));
    }

    if config.pyramid.max_levels == 0 {
        return Err(ConfigError::ValidationError(
            "pyramid.max_levels must be positive".to_string(),
        ));
    }

    let levels = config.pyramid.default_levels;
    if !u32::try_from(levels).is_ok_and(|levels| levels <= config.pyramid.max_levels) {
        return Err(ConfigError::ValidationError(format!(
            "pyramid.default_levels must be in [0, {}], got {levels}",
            config.pyramid.max_levels
        )));
    }

    let fill = config.pyramid.default_immediate_fill_pct;
    if fill < Decimal::ZERO || fill > hundred {
        return Err(ConfigError::ValidationError(format!(
            "pyramid.default_immediate_fill_pct must be in [0, 100], got {fill}"
        )));
    }

    let shape = config.pyramid.default_risk_shape;
    if shape < Decimal::ZERO || shape > Decimal::ONE {
        return Err(ConfigError::ValidationError(format!(
            "pyramid.default_risk_shape must be in [0, 1], got {shape}"
        )));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
