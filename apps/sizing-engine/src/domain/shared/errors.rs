//! Domain errors shared by the sizing and planning contexts.

use rust_decimal::Decimal;
use std::fmt;

/// A basic input check that failed before any arithmetic ran.
///
/// Both bounded contexts convert this into their own error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputViolation {
    /// A price that must be strictly positive was zero or negative.
    NonPositivePrice {
        /// Input field name (e.g. "entry_price").
        field: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// Leverage was zero or negative.
    NonPositiveLeverage {
        /// Offending value.
        value: Decimal,
    },
}

impl fmt::Display for InputViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePrice { field, value } => {
                write!(f, "'{field}' must be positive, got {value}")
            }
            Self::NonPositiveLeverage { value } => {
                write!(f, "Leverage must be greater than 0, got {value}")
            }
        }
    }
}

impl std::error::Error for InputViolation {}

/// A Decimal operation left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticOverflow {
    /// Name of the quantity being computed.
    pub operation: &'static str,
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arithmetic overflow while computing {}", self.operation)
    }
}

impl std::error::Error for ArithmeticOverflow {}
