//! Output record of pyramid planning.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RiskShape, Tranche};
use crate::domain::shared::{Direction, Money};

/// Aggregates over every tranche of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanTotals {
    /// Sum of tranche risk.
    pub risk: Money,
    /// Sum of tranche notional.
    pub notional: Money,
    /// Total notional divided by leverage.
    pub margin: Money,
}

/// Effective parameters the planner actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMetadata {
    /// Risk shape after clamping.
    pub risk_shape: RiskShape,
    /// Immediate-fill percent after clamping.
    pub immediate_fill_pct: Decimal,
    /// Ladder top after defaulting to the live price.
    pub effective_top: Decimal,
    /// Number of limit levels.
    pub levels: u32,
}

/// An ordered set of tranches: optional market tranche first, then limit
/// levels from the top of the range toward the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidPlan {
    /// Long or short.
    pub side: Direction,
    /// Requested risk budget, rounded.
    pub total_risk: Money,
    /// Tranches in execution order.
    pub tranches: Vec<Tranche>,
    /// Aggregates.
    pub totals: PlanTotals,
    /// Effective parameters.
    pub metadata: PlanMetadata,
}

impl PyramidPlan {
    /// The immediate tranche, if one was planned.
    #[must_use]
    pub fn market_tranche(&self) -> Option<&Tranche> {
        self.tranches.iter().find(|t| t.is_market())
    }

    /// Limit tranches, top level first.
    pub fn limit_tranches(&self) -> impl Iterator<Item = &Tranche> {
        self.tranches.iter().filter(|t| !t.is_market())
    }

    /// True when the plan carries no orders at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tranches.is_empty()
    }

    /// Requested risk minus the risk actually allocated.
    #[must_use]
    pub fn unallocated_risk(&self) -> Money {
        self.total_risk - self.totals.risk
    }
}
