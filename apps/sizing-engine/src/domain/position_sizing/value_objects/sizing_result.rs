//! Output record of single-trade sizing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Direction, Money, Quantity};

/// Result of sizing one trade. All currency fields are rounded to 2 dp and
/// the position size to 6 dp; leverage is echoed as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingResult {
    /// Inferred direction.
    pub direction: Direction,
    /// Base-asset quantity to trade.
    pub position_size: Quantity,
    /// Currency lost if the stop is hit.
    pub risk_amount: Money,
    /// Position size times entry price.
    pub notional_value: Money,
    /// Notional divided by leverage.
    pub margin_required: Money,
    /// Requested leverage.
    pub leverage: Decimal,
    /// Notional divided by risk amount, rounded to 2 dp.
    pub max_safe_leverage: Decimal,
    /// `leverage <= max_safe_leverage`. Advisory only.
    pub leverage_safe: bool,
}

/// Tagged leverage verdict so callers branch on it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LeverageSafety {
    /// Requested leverage is within the safe bound.
    Safe,
    /// Requested leverage exceeds the safe bound.
    Unsafe {
        /// Requested leverage.
        requested: Decimal,
        /// Highest leverage considered safe.
        max_safe: Decimal,
    },
}

impl SizingResult {
    /// Leverage verdict as a tagged outcome.
    #[must_use]
    pub const fn leverage_safety(&self) -> LeverageSafety {
        if self.leverage_safe {
            LeverageSafety::Safe
        } else {
            LeverageSafety::Unsafe {
                requested: self.leverage,
                max_safe: self.max_safe_leverage,
            }
        }
    }

    /// Whether the required margin is more than the account can post.
    #[must_use]
    pub fn exceeds_balance(&self, balance: Decimal) -> bool {
        self.margin_required.amount() > balance
    }
}
