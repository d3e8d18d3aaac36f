//! Input record for single-trade sizing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for sizing one trade. The account balance is passed alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRiskParameters {
    /// Share of the balance to lose if the stop is hit, in percent (intended (0, 100]).
    pub risk_percent: Decimal,
    /// Exposure multiplier relative to committed margin.
    pub leverage: Decimal,
    /// Entry price. For market orders the caller resolves this to the live price.
    pub entry_price: Decimal,
    /// Stop-loss price; must differ from the entry price.
    pub stop_loss_price: Decimal,
}

impl TradeRiskParameters {
    /// Distance between entry and stop per unit of the asset.
    #[must_use]
    pub fn risk_per_unit(&self) -> Decimal {
        (self.entry_price - self.stop_loss_price).abs()
    }
}
