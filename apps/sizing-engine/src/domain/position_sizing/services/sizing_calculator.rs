//! Core single-trade sizing logic.

use rust_decimal::Decimal;

use crate::domain::position_sizing::errors::SizingError;
use crate::domain::position_sizing::value_objects::{SizingResult, TradeRiskParameters};
use crate::domain::shared::validation::{
    div, ensure_positive_leverage, ensure_positive_price, mul, risk_budget,
};
use crate::domain::shared::{Direction, Money, Quantity, round_currency};

/// Stateless calculator turning a risk budget and an entry/stop pair into a position.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizingCalculator;

impl SizingCalculator {
    /// Create a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Size a trade for the given account balance.
    ///
    /// All validation runs before any arithmetic:
    /// - entry and stop must be positive and distinct
    /// - leverage must be positive
    /// - the risk amount must be positive
    ///
    /// Leverage safety is reported, never enforced.
    pub fn size(
        &self,
        balance: Decimal,
        params: &TradeRiskParameters,
    ) -> Result<SizingResult, SizingError> {
        Self::validate(balance, params)?;

        let direction = Direction::infer(params.entry_price, params.stop_loss_price);
        let risk_amount = risk_budget(balance, params.risk_percent)?;
        let risk_per_unit = params.risk_per_unit();
        let position_size = div(risk_amount, risk_per_unit, "position size")?;
        let notional = mul(position_size, params.entry_price, "notional value")?;
        let margin = div(notional, params.leverage, "margin required")?;
        let max_safe_leverage = round_currency(div(notional, risk_amount, "max safe leverage")?);

        Ok(SizingResult {
            direction,
            position_size: Quantity::rounded(position_size),
            risk_amount: Money::rounded(risk_amount),
            notional_value: Money::rounded(notional),
            margin_required: Money::rounded(margin),
            leverage: params.leverage,
            max_safe_leverage,
            leverage_safe: params.leverage <= max_safe_leverage,
        })
    }

    fn validate(balance: Decimal, params: &TradeRiskParameters) -> Result<(), SizingError> {
        ensure_positive_price("entry_price", params.entry_price)?;
        ensure_positive_price("stop_loss_price", params.stop_loss_price)?;

        if params.entry_price == params.stop_loss_price {
            return Err(SizingError::InvalidPrice {
                field: "stop_loss_price",
                value: params.stop_loss_price,
                reason: "must differ from entry price",
            });
        }

        ensure_positive_leverage(params.leverage)?;

        if balance <= Decimal::ZERO || params.risk_percent <= Decimal::ZERO {
            return Err(SizingError::InvalidRisk {
                balance,
                risk_percent: params.risk_percent,
            });
        }

        Ok(())
    }
}
