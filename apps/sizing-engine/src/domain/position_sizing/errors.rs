//! Errors for single-trade sizing.

use rust_decimal::Decimal;
use std::fmt;

use crate::domain::shared::{ArithmeticOverflow, InputViolation};

/// Error during position sizing calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizingError {
    /// A price was zero or negative, or the entry equals the stop.
    InvalidPrice {
        /// Input field name.
        field: &'static str,
        /// Offending value.
        value: Decimal,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Leverage was zero or negative.
    InvalidLeverage {
        /// Offending value.
        value: Decimal,
    },

    /// Balance or risk percent produced a non-positive risk amount.
    InvalidRisk {
        /// Account balance.
        balance: Decimal,
        /// Requested risk percent.
        risk_percent: Decimal,
    },

    /// An intermediate value left the Decimal range.
    Overflow(ArithmeticOverflow),
}

impl fmt::Display for SizingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrice {
                field,
                value,
                reason,
            } => write!(f, "Invalid {field} {value}: {reason}"),
            Self::InvalidLeverage { value } => {
                write!(f, "Leverage must be greater than 0, got {value}")
            }
            Self::InvalidRisk {
                balance,
                risk_percent,
            } => write!(
                f,
                "Risk amount must be positive (balance {balance}, risk {risk_percent}%)"
            ),
            Self::Overflow(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for SizingError {}

impl From<InputViolation> for SizingError {
    fn from(violation: InputViolation) -> Self {
        match violation {
            InputViolation::NonPositivePrice { field, value } => Self::InvalidPrice {
                field,
                value,
                reason: "must be positive",
            },
            InputViolation::NonPositiveLeverage { value } => Self::InvalidLeverage { value },
        }
    }
}

impl From<ArithmeticOverflow> for SizingError {
    fn from(overflow: ArithmeticOverflow) -> Self {
        Self::Overflow(overflow)
    }
}
