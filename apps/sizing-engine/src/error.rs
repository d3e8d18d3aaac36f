//! Engine-level error handling.
//!
//! Domain errors are converted into an [`EngineError`] at the application
//! boundary: a stable [`ErrorCode`], a human-readable message and key/value
//! context describing the offending input.
//!
//! # Error Codes
//!
//! | Code | Usage |
//! |------|-------|
//! | `INVALID_PRICE` | Non-positive price, or entry equal to stop |
//! | `INVALID_LEVERAGE` | Leverage zero or negative |
//! | `INVALID_RISK` | Risk budget zero or negative |
//! | `INVALID_LEVELS` | Ladder level count negative or above the limit |
//! | `INVALID_RANGE` | Stop, bottom and top not ordered for either side |
//! | `DEGENERATE_STOP` | A tranche price sits on the stop |
//! | `ARITHMETIC_OVERFLOW` | Intermediate value out of Decimal range |
//! | `INVALID_REQUEST` | Malformed request document |
//! | `CONFIG_ERROR` | Configuration could not be loaded |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::position_sizing::SizingError;
use crate::domain::pyramid_planning::PlanningError;

/// Error codes for the sizing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input validation
    /// Non-positive price, or entry equal to stop.
    InvalidPrice,
    /// Leverage zero or negative.
    InvalidLeverage,
    /// Risk budget zero or negative.
    InvalidRisk,
    /// Level count negative or above the limit.
    InvalidLevels,
    /// Stop, bottom and top do not form a ladder.
    InvalidRange,
    /// A tranche price coincides with the stop.
    DegenerateStop,

    // Arithmetic
    /// Intermediate value out of range.
    ArithmeticOverflow,

    // Boundary
    /// Malformed request document.
    InvalidRequest,
    /// Configuration failure.
    ConfigError,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidPrice => "INVALID_PRICE",
            Self::InvalidLeverage => "INVALID_LEVERAGE",
            Self::InvalidRisk => "INVALID_RISK",
            Self::InvalidLevels => "INVALID_LEVELS",
            Self::InvalidRange => "INVALID_RANGE",
            Self::DegenerateStop => "DEGENERATE_STOP",
            Self::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// True for errors caused by the caller's input rather than the engine.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::ArithmeticOverflow | Self::ConfigError)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A rich error with context for the sizing engine.
#[derive(Debug, Error)]
#[error("[{}] {}", .code.reason(), .message)]
pub struct EngineError {
    /// Error code.
    code: ErrorCode,
    /// Human-readable message.
    message: String,
    /// Additional context (key-value pairs).
    context: Vec<(String, String)>,
}

impl EngineError {
    /// Create a new engine error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.push((key.into(), value.to_string()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convert to a serializable response body.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code,
            message: self.message.clone(),
            details: self.context.iter().cloned().collect(),
        }
    }
}

/// Serializable error body emitted by the batch evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Offending inputs.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

impl From<SizingError> for EngineError {
    fn from(err: SizingError) -> Self {
        let message = err.to_string();
        match err {
            SizingError::InvalidPrice { field, value, .. } => {
                Self::new(ErrorCode::InvalidPrice, message).with_context(field, value)
            }
            SizingError::InvalidLeverage { value } => {
                Self::new(ErrorCode::InvalidLeverage, message).with_context("leverage", value)
            }
            SizingError::InvalidRisk {
                balance,
                risk_percent,
            } => Self::new(ErrorCode::InvalidRisk, message)
                .with_context("balance", balance)
                .with_context("risk_percent", risk_percent),
            SizingError::Overflow(overflow) => Self::new(ErrorCode::ArithmeticOverflow, message)
                .with_context("operation", overflow.operation),
        }
    }
}

impl From<PlanningError> for EngineError {
    fn from(err: PlanningError) -> Self {
        let message = err.to_string();
        match err {
            PlanningError::InvalidPrice { field, value } => {
                Self::new(ErrorCode::InvalidPrice, message).with_context(field, value)
            }
            PlanningError::InvalidLeverage { value } => {
                Self::new(ErrorCode::InvalidLeverage, message).with_context("leverage", value)
            }
            PlanningError::InvalidRisk { total_risk } => {
                Self::new(ErrorCode::InvalidRisk, message).with_context("total_risk", total_risk)
            }
            PlanningError::InvalidLevels { levels, max } => {
                Self::new(ErrorCode::InvalidLevels, message)
                    .with_context("levels", levels)
                    .with_context("max_levels", max)
            }
            PlanningError::InvalidRange { stop, bottom, top } => {
                Self::new(ErrorCode::InvalidRange, message)
                    .with_context("stop_price", stop)
                    .with_context("bottom_price", bottom)
                    .with_context("top_price", top)
            }
            PlanningError::DegenerateStop { kind, level, price } => {
                Self::new(ErrorCode::DegenerateStop, message)
                    .with_context("kind", kind)
                    .with_context("level", level)
                    .with_context("price", price)
            }
            PlanningError::Overflow(overflow) => Self::new(ErrorCode::ArithmeticOverflow, message)
                .with_context("operation", overflow.operation),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        let error = Self::invalid_request(err.to_string());
        if err.line() == 0 {
            error
        } else {
            error
                .with_context("line", err.line())
                .with_context("column", err.column())
        }
    }
}
