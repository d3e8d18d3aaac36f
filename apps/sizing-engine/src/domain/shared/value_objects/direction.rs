//! Trade direction (long or short).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction, inferred from where the stop sits relative to the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Profits if price rises; stop below entry.
    Long,
    /// Profits if price falls; stop above entry.
    Short,
}

impl Direction {
    /// Infer direction from a reference price and its stop.
    ///
    /// `Long` iff `stop < reference`, otherwise `Short`.
    #[must_use]
    pub fn infer(reference_price: Decimal, stop_price: Decimal) -> Self {
        if stop_price < reference_price {
            Self::Long
        } else {
            Self::Short
        }
    }

    /// Returns true for `Long`.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
        }
    }
}
