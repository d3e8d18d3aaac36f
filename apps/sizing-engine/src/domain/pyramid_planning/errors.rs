//! Errors for pyramid planning.

use rust_decimal::Decimal;
use std::fmt;

use super::value_objects::TrancheKind;
use crate::domain::shared::{ArithmeticOverflow, InputViolation};

/// Error during pyramid planning. The first violated rule aborts the whole
/// plan; no partial tranche list is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// A required price was zero or negative.
    InvalidPrice {
        /// Input field name.
        field: &'static str,
        /// Offending value.
        value: Decimal,
    },

    /// Leverage was zero or negative.
    InvalidLeverage {
        /// Offending value.
        value: Decimal,
    },

    /// Balance times risk percent was zero or negative.
    InvalidRisk {
        /// Computed total risk.
        total_risk: Decimal,
    },

    /// Level count negative or above the planner's limit.
    InvalidLevels {
        /// Requested level count.
        levels: i32,
        /// Largest accepted level count.
        max: u32,
    },

    /// Stop, bottom and top do not describe a long or a short ladder.
    InvalidRange {
        /// Stop price.
        stop: Decimal,
        /// Bottom of the ladder.
        bottom: Decimal,
        /// Effective top of the ladder.
        top: Decimal,
    },

    /// A tranche price coincides with the stop, leaving no risk per unit.
    DegenerateStop {
        /// Kind of the offending tranche.
        kind: TrancheKind,
        /// 1-based ladder level; 0 for the market tranche.
        level: u32,
        /// Offending price.
        price: Decimal,
    },

    /// An intermediate value left the Decimal range.
    Overflow(ArithmeticOverflow),
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrice { field, value } => {
                write!(f, "'{field}' must be positive, got {value}")
            }
            Self::InvalidLeverage { value } => {
                write!(f, "Leverage must be greater than 0, got {value}")
            }
            Self::InvalidRisk { total_risk } => {
                write!(f, "Total risk must be positive, got {total_risk}")
            }
            Self::InvalidLevels { levels, max } => {
                write!(f, "Level count must be between 0 and {max}, got {levels}")
            }
            Self::InvalidRange { stop, bottom, top } => write!(
                f,
                "Invalid range: need stop < bottom < top (long) or stop > bottom > top (short), \
                 got stop={stop} bottom={bottom} top={top}"
            ),
            Self::DegenerateStop { kind, level, price } => write!(
                f,
                "{kind} tranche at level {level} sits on the stop price {price}"
            ),
            Self::Overflow(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for PlanningError {}

impl From<InputViolation> for PlanningError {
    fn from(violation: InputViolation) -> Self {
        match violation {
            InputViolation::NonPositivePrice { field, value } => {
                Self::InvalidPrice { field, value }
            }
            InputViolation::NonPositiveLeverage { value } => Self::InvalidLeverage { value },
        }
    }
}

impl From<ArithmeticOverflow> for PlanningError {
    fn from(overflow: ArithmeticOverflow) -> Self {
        Self::Overflow(overflow)
    }
}
