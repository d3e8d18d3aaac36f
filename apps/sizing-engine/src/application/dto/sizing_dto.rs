//! Sizing DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderIntentDto, OrderType};
use crate::config::SizingConfig;
use crate::domain::position_sizing::{SizingResult, TradeRiskParameters};

/// Request DTO for sizing one trade. Omitted values come from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePositionRequestDto {
    /// Account balance.
    pub balance: Decimal,
    /// Risk per trade in percent.
    #[serde(default)]
    pub risk_percent: Option<Decimal>,
    /// Leverage.
    #[serde(default)]
    pub leverage: Option<Decimal>,
    /// Entry price.
    pub entry_price: Decimal,
    /// Stop-loss price.
    pub stop_loss_price: Decimal,
    /// Instrument symbol; order intents are produced only when present.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Entry order type for the produced intent.
    #[serde(default)]
    pub order_type: OrderType,
}

impl SizePositionRequestDto {
    /// Resolve into domain parameters, filling gaps from `defaults`.
    #[must_use]
    pub fn to_domain(&self, defaults: &SizingConfig) -> TradeRiskParameters {
        TradeRiskParameters {
            risk_percent: self.risk_percent.unwrap_or(defaults.default_risk_percent),
            leverage: self.leverage.unwrap_or(defaults.default_leverage),
            entry_price: self.entry_price,
            stop_loss_price: self.stop_loss_price,
        }
    }
}

/// Response DTO for a sized trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePositionResponseDto {
    /// The sizing result.
    #[serde(flatten)]
    pub result: SizingResult,
    /// Required margin is more than the balance.
    pub margin_exceeds_balance: bool,
    /// Order to place, when a symbol was given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_intents: Vec<OrderIntentDto>,
}
