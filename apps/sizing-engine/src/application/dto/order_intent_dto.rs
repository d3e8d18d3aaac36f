//! Order intent DTOs
//!
//! Venue-neutral orders derived from a sizing result or a pyramid plan.
//! Nothing here submits anything.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::position_sizing::{SizingResult, TradeRiskParameters};
use crate::domain::pyramid_planning::{PyramidPlan, Tranche, TrancheKind};
use crate::domain::shared::{Direction, Quantity};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Opens a long position.
    Buy,
    /// Opens a short position.
    Sell,
}

impl From<Direction> for OrderSide {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Long => Self::Buy,
            Direction::Short => Self::Sell,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type specifying execution behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Execute at the best available price.
    Market,
    /// Rest at the entry price.
    #[default]
    Limit,
}

impl OrderType {
    /// Returns true if this order type carries an entry price.
    #[must_use]
    pub const fn requires_limit_price(&self) -> bool {
        matches!(self, Self::Limit)
    }
}

impl From<TrancheKind> for OrderType {
    fn from(kind: TrancheKind) -> Self {
        match kind {
            TrancheKind::Market => Self::Market,
            TrancheKind::Limit => Self::Limit,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Limit => write!(f, "limit"),
        }
    }
}

/// A single order ready to be handed to an execution venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntentDto {
    /// Instrument symbol.
    pub symbol: String,
    /// Market or limit.
    pub order_type: OrderType,
    /// Buy or sell.
    pub side: OrderSide,
    /// Base-asset quantity.
    pub amount: Quantity,
    /// Protective stop attached to the order.
    pub stop_loss_price: Decimal,
    /// Limit price; absent for market orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<Decimal>,
    /// Leverage to apply.
    pub leverage: Decimal,
}

impl OrderIntentDto {
    /// Build the single order for a sized trade.
    #[must_use]
    pub fn from_sizing(
        symbol: &str,
        order_type: OrderType,
        result: &SizingResult,
        params: &TradeRiskParameters,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            order_type,
            side: result.direction.into(),
            amount: result.position_size,
            stop_loss_price: params.stop_loss_price,
            entry_price: order_type
                .requires_limit_price()
                .then_some(params.entry_price),
            leverage: result.leverage,
        }
    }

    /// Build one order per tranche of a plan, in plan order.
    ///
    /// Tranches with a zero quantity carry no exposure and are skipped.
    #[must_use]
    pub fn from_plan(
        symbol: &str,
        plan: &PyramidPlan,
        stop_loss_price: Decimal,
        leverage: Decimal,
    ) -> Vec<Self> {
        plan.tranches
            .iter()
            .filter(|t| !t.quantity.is_zero())
            .map(|t| Self::from_tranche(symbol, plan.side, t, stop_loss_price, leverage))
            .collect()
    }

    fn from_tranche(
        symbol: &str,
        side: Direction,
        tranche: &Tranche,
        stop_loss_price: Decimal,
        leverage: Decimal,
    ) -> Self {
        let order_type = OrderType::from(tranche.kind);
        Self {
            symbol: symbol.to_string(),
            order_type,
            side: side.into(),
            amount: tranche.quantity,
            stop_loss_price,
            entry_price: order_type.requires_limit_price().then_some(tranche.price),
            leverage,
        }
    }
}
