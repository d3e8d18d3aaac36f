//! A single order within a pyramid plan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{Money, Quantity};

/// How a tranche is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrancheKind {
    /// Immediate fill at the live price.
    Market,
    /// Resting order at a ladder level.
    Limit,
}

impl fmt::Display for TrancheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Limit => write!(f, "limit"),
        }
    }
}

/// One order of a pyramid plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tranche {
    /// Market or limit.
    pub kind: TrancheKind,
    /// Execution price (live price for market tranches).
    pub price: Decimal,
    /// Share of the risk budget carried by this tranche.
    pub risk: Money,
    /// Base-asset quantity.
    pub quantity: Quantity,
    /// Quantity times price.
    pub notional: Money,
}

impl Tranche {
    /// Returns true for the immediate (market) tranche.
    #[must_use]
    pub const fn is_market(&self) -> bool {
        matches!(self.kind, TrancheKind::Market)
    }
}
