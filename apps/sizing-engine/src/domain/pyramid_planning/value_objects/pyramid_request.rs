//! Input record for pyramid planning.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A risk budget to be split across an immediate fill and a price ladder.
///
/// Every field is supplied by the caller; the planner never fetches prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidRequest {
    /// Account balance.
    pub balance: Decimal,
    /// Total risk as a percent of the balance.
    pub risk_percent: Decimal,
    /// Stop-loss price shared by every tranche.
    pub stop_price: Decimal,
    /// Leverage applied to the whole plan.
    pub leverage: Decimal,
    /// Ladder start (exclusive). Defaults to the live price.
    #[serde(default)]
    pub top_price: Option<Decimal>,
    /// Ladder end (inclusive).
    pub bottom_price: Decimal,
    /// Current market price, used for the immediate tranche.
    pub live_price: Decimal,
    /// Number of limit levels. Signed so that bad input surfaces as an error.
    pub levels: i32,
    /// Percent of the total risk filled immediately at the live price.
    #[serde(default)]
    pub immediate_fill_pct: Decimal,
    /// 0 = equal risk per level, 1 = linear toward the bottom.
    #[serde(default)]
    pub risk_shape: Decimal,
}

impl PyramidRequest {
    /// Ladder top: the explicit top price, or the live price.
    #[must_use]
    pub fn effective_top(&self) -> Decimal {
        self.top_price.unwrap_or(self.live_price)
    }
}
