//! Defaults for single-trade sizing requests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Values used when a sizing request omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Risk per trade as a percent of the balance.
    #[serde(default = "default_risk_percent")]
    pub default_risk_percent: Decimal,
    /// Leverage when none is given.
    #[serde(default = "default_leverage")]
    pub default_leverage: Decimal,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            default_risk_percent: default_risk_percent(),
            default_leverage: default_leverage(),
        }
    }
}

pub(crate) const fn default_risk_percent() -> Decimal {
    Decimal::ONE
}

pub(crate) const fn default_leverage() -> Decimal {
    Decimal::ONE
}
