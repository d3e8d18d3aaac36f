//! Tracing Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr, so that
//! stdout carries nothing but evaluation results.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; overrides `observability.logging.level`
//! - `observability.logging.format`: `json` (default) or `pretty`
//!
//! # Usage
//!
//! ```rust,ignore
//! use sizing_engine::telemetry::init_telemetry;
//!
//! let config = sizing_engine::config::load_default_config()?;
//! init_telemetry(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the level filter: `RUST_LOG` when set, the configured level
/// otherwise, `info` if neither parses.
#[must_use]
pub fn build_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_telemetry(logging: &LoggingConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(logging))
        .with_writer(std::io::stderr);

    if logging.is_json() {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.pretty().with_target(false).try_init()
    }
}
