//! Pyramid DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderIntentDto;
use crate::config::{PyramidConfig, SizingConfig};
use crate::domain::pyramid_planning::{PyramidPlan, PyramidRequest};

/// Request DTO for a pyramid plan. Omitted values come from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPyramidRequestDto {
    /// Account balance.
    pub balance: Decimal,
    /// Total risk in percent of the balance.
    #[serde(default)]
    pub risk_percent: Option<Decimal>,
    /// Shared stop-loss price.
    pub stop_price: Decimal,
    /// Leverage.
    #[serde(default)]
    pub leverage: Option<Decimal>,
    /// Ladder start; defaults to the live price.
    #[serde(default)]
    pub top_price: Option<Decimal>,
    /// Ladder end.
    pub bottom_price: Decimal,
    /// Current market price.
    pub live_price: Decimal,
    /// Number of limit levels.
    #[serde(default)]
    pub levels: Option<i32>,
    /// Percent of the risk filled immediately.
    #[serde(default)]
    pub immediate_fill_pct: Option<Decimal>,
    /// Risk shape between 0 and 1.
    #[serde(default)]
    pub risk_shape: Option<Decimal>,
    /// Instrument symbol; order intents are produced only when present.
    #[serde(default)]
    pub symbol: Option<String>,
}

impl PlanPyramidRequestDto {
    /// Resolve into a domain request, filling gaps from configuration.
    #[must_use]
    pub fn to_domain(&self, sizing: &SizingConfig, pyramid: &PyramidConfig) -> PyramidRequest {
        PyramidRequest {
            balance: self.balance,
            risk_percent: self.risk_percent.unwrap_or(sizing.default_risk_percent),
            stop_price: self.stop_price,
            leverage: self.leverage.unwrap_or(sizing.default_leverage),
            top_price: self.top_price,
            bottom_price: self.bottom_price,
            live_price: self.live_price,
            levels: self.levels.unwrap_or(pyramid.default_levels),
            immediate_fill_pct: self
                .immediate_fill_pct
                .unwrap_or(pyramid.default_immediate_fill_pct),
            risk_shape: self.risk_shape.unwrap_or(pyramid.default_risk_shape),
        }
    }
}

/// Response DTO for a pyramid plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPyramidResponseDto {
    /// The plan.
    #[serde(flatten)]
    pub plan: PyramidPlan,
    /// Total margin is more than the balance.
    pub margin_exceeds_balance: bool,
    /// Orders to place, when a symbol was given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_intents: Vec<OrderIntentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_fill_missing_fields() {
        let request: PlanPyramidRequestDto = serde_json::from_str(
            r#"{"balance": 100000, "stop_price": 29000, "bottom_price": 29500, "live_price": 30000}"#,
        )
        .unwrap();
        let pyramid = PyramidConfig {
            default_levels: 3,
            default_immediate_fill_pct: dec!(10),
            default_risk_shape: dec!(0.5),
            ..PyramidConfig::default()
        };

        let domain = request.to_domain(&SizingConfig::default(), &pyramid);
        assert_eq!(domain.risk_percent, dec!(1));
        assert_eq!(domain.leverage, dec!(1));
        assert_eq!(domain.levels, 3);
        assert_eq!(domain.immediate_fill_pct, dec!(10));
        assert_eq!(domain.risk_shape, dec!(0.5));
        assert_eq!(domain.top_price, None);
    }
}
