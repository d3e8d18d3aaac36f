//! Core pyramid planning logic.

use rust_decimal::Decimal;

use super::ladder::{apportion, price_grid};
use crate::domain::pyramid_planning::errors::PlanningError;
use crate::domain::pyramid_planning::value_objects::{
    PlanMetadata, PlanTotals, PyramidPlan, PyramidRequest, RiskShape, Tranche, TrancheKind,
};
use crate::domain::shared::validation::{
    HUNDRED, add, div, ensure_positive_leverage, ensure_positive_price, mul, risk_budget,
};
use crate::domain::shared::{Direction, Money, Quantity, round_currency};

/// A tranche before rounding: price, raw risk share and distance to the stop.
#[derive(Debug, Clone, Copy)]
struct Draft {
    kind: TrancheKind,
    price: Decimal,
    risk: Decimal,
    risk_per_unit: Decimal,
}

/// Validated request with defaults resolved.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    side: Direction,
    total_risk: Decimal,
    top: Decimal,
    levels: u32,
}

/// Largest ladder accepted when no other bound is configured.
pub const MAX_LEVELS: u32 = 1_000;

/// Planner splitting a risk budget into an immediate fill plus a ladder of
/// limit orders between a top and a bottom price.
#[derive(Debug, Clone, Copy)]
pub struct PyramidPlanner {
    max_levels: u32,
}

impl Default for PyramidPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PyramidPlanner {
    /// Create a planner accepting up to [`MAX_LEVELS`] ladder levels.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_levels(MAX_LEVELS)
    }

    /// Create a planner with a custom ladder size limit.
    #[must_use]
    pub const fn with_max_levels(max_levels: u32) -> Self {
        Self { max_levels }
    }

    /// Build a pyramid plan.
    ///
    /// Validation order: leverage, level count, total risk, prices, range.
    /// Every tranche is checked against the stop before any is emitted.
    /// Tranche risks are whole cents summing to the rounded total risk, or
    /// to the rounded immediate risk when there is no ladder. Quantities come
    /// from the unrounded risk share.
    pub fn plan(&self, request: &PyramidRequest) -> Result<PyramidPlan, PlanningError> {
        let resolved = self.resolve(request)?;

        let immediate_fill_pct = request.immediate_fill_pct.clamp(Decimal::ZERO, HUNDRED);
        let immediate_risk = mul(
            div(immediate_fill_pct, HUNDRED, "immediate risk")?,
            resolved.total_risk,
            "immediate risk",
        )?;
        let remaining_risk = resolved.total_risk - immediate_risk;
        let shape = RiskShape::new(request.risk_shape);

        let mut drafts = Vec::new();

        if immediate_risk > Decimal::ZERO {
            let risk_per_unit = (request.live_price - request.stop_price).abs();
            if risk_per_unit.is_zero() {
                return Err(PlanningError::DegenerateStop {
                    kind: TrancheKind::Market,
                    level: 0,
                    price: request.live_price,
                });
            }
            drafts.push(Draft {
                kind: TrancheKind::Market,
                price: request.live_price,
                risk: immediate_risk,
                risk_per_unit,
            });
        }

        if resolved.levels > 0 {
            let prices = price_grid(resolved.top, request.bottom_price, resolved.levels)?;
            let weights = shape.weights(resolved.levels);

            for (level, (price, weight)) in (1u32..).zip(prices.into_iter().zip(weights)) {
                let risk_per_unit = (price - request.stop_price).abs();
                if risk_per_unit.is_zero() {
                    return Err(PlanningError::DegenerateStop {
                        kind: TrancheKind::Limit,
                        level,
                        price,
                    });
                }
                drafts.push(Draft {
                    kind: TrancheKind::Limit,
                    price,
                    risk: mul(remaining_risk, weight, "tranche risk")?,
                    risk_per_unit,
                });
            }
        }

        let allocated = if resolved.levels > 0 {
            resolved.total_risk
        } else {
            immediate_risk
        };
        let tranches = Self::finalize(&drafts, allocated)?;
        let totals = Self::aggregate(&tranches, request.leverage)?;

        Ok(PyramidPlan {
            side: resolved.side,
            total_risk: Money::rounded(resolved.total_risk),
            tranches,
            totals,
            metadata: PlanMetadata {
                risk_shape: shape,
                immediate_fill_pct,
                effective_top: resolved.top,
                levels: resolved.levels,
            },
        })
    }

    fn resolve(&self, request: &PyramidRequest) -> Result<Resolved, PlanningError> {
        ensure_positive_leverage(request.leverage)?;

        let levels = u32::try_from(request.levels)
            .ok()
            .filter(|levels| *levels <= self.max_levels)
            .ok_or(PlanningError::InvalidLevels {
                levels: request.levels,
                max: self.max_levels,
            })?;

        let total_risk = risk_budget(request.balance, request.risk_percent)?;
        if total_risk <= Decimal::ZERO {
            return Err(PlanningError::InvalidRisk { total_risk });
        }

        ensure_positive_price("stop_price", request.stop_price)?;
        ensure_positive_price("bottom_price", request.bottom_price)?;
        if let Some(top) = request.top_price {
            ensure_positive_price("top_price", top)?;
        }
        ensure_positive_price("live_price", request.live_price)?;

        let top = request.effective_top();
        let side = Self::infer_side(request.stop_price, request.bottom_price, top)?;

        Ok(Resolved {
            side,
            total_risk,
            top,
            levels,
        })
    }

    /// Long ladders run down toward a stop below them, short ladders up toward
    /// a stop above them. A stop exactly at the bottom passes here and is
    /// reported as a degenerate bottom level.
    fn infer_side(
        stop: Decimal,
        bottom: Decimal,
        top: Decimal,
    ) -> Result<Direction, PlanningError> {
        if bottom < top && stop <= bottom {
            Ok(Direction::Long)
        } else if bottom > top && stop >= bottom {
            Ok(Direction::Short)
        } else {
            Err(PlanningError::InvalidRange { stop, bottom, top })
        }
    }

    /// Round every draft's risk to cents so the risks add up exactly to
    /// `target`. Quantity is the unrounded risk over the risk per unit.
    fn finalize(drafts: &[Draft], target: Decimal) -> Result<Vec<Tranche>, PlanningError> {
        let raw: Vec<Decimal> = drafts.iter().map(|d| d.risk).collect();
        let risks = apportion(&raw, round_currency(target));

        drafts
            .iter()
            .zip(risks)
            .map(|(draft, risk)| {
                let quantity = Quantity::rounded(div(
                    draft.risk,
                    draft.risk_per_unit,
                    "tranche quantity",
                )?);
                let notional =
                    Money::rounded(mul(quantity.amount(), draft.price, "tranche notional")?);

                Ok(Tranche {
                    kind: draft.kind,
                    price: draft.price,
                    risk: Money::rounded(risk),
                    quantity,
                    notional,
                })
            })
            .collect()
    }

    fn aggregate(tranches: &[Tranche], leverage: Decimal) -> Result<PlanTotals, PlanningError> {
        let mut risk = Decimal::ZERO;
        let mut notional = Decimal::ZERO;
        for tranche in tranches {
            risk = add(risk, tranche.risk.amount(), "total risk")?;
            notional = add(notional, tranche.notional.amount(), "total notional")?;
        }
        let margin = div(notional, leverage, "total margin")?;

        Ok(PlanTotals {
            risk: Money::rounded(risk),
            notional: Money::rounded(notional),
            margin: Money::rounded(margin),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::ArithmeticOverflow;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn btc_ladder() -> PyramidRequest {
        PyramidRequest {
            balance: dec!(100000),
            risk_percent: dec!(1),
            stop_price: dec!(29000),
            leverage: dec!(10),
            top_price: None,
            bottom_price: dec!(29500),
            live_price: dec!(30000),
            levels: 2,
            immediate_fill_pct: dec!(20),
            risk_shape: dec!(1),
        }
    }

    #[test]
    fn reference_ladder_with_immediate_fill() {
        let plan = PyramidPlanner::new().plan(&btc_ladder()).unwrap();

        assert_eq!(plan.side, Direction::Long);
        assert_eq!(plan.total_risk.amount(), dec!(1000.00));
        assert_eq!(plan.tranches.len(), 3);

        let market = plan.market_tranche().unwrap();
        assert_eq!(market.price, dec!(30000));
        assert_eq!(market.risk.amount(), dec!(200.00));
        assert_eq!(market.quantity.amount(), dec!(0.2));
        assert_eq!(market.notional.amount(), dec!(6000.00));

        let limits: Vec<_> = plan.limit_tranches().collect();
        assert_eq!(limits[0].price, dec!(29750));
        assert_eq!(limits[1].price, dec!(29500));
        assert_eq!(limits[0].risk.amount(), dec!(266.67));
        assert_eq!(limits[1].risk.amount(), dec!(533.33));
        assert!(limits[1].risk > limits[0].risk);
        assert_eq!(limits[0].quantity.amount(), dec!(0.355556));
        assert_eq!(limits[1].quantity.amount(), dec!(1.066667));
        assert_eq!(limits[0].notional.amount(), dec!(10577.79));
        assert_eq!(limits[1].notional.amount(), dec!(31466.68));

        assert_eq!(plan.totals.risk.amount(), dec!(1000.00));
        assert_eq!(plan.unallocated_risk(), Money::ZERO);
    }

    #[test]
    fn totals_are_sums_of_rounded_tranches() {
        let plan = PyramidPlanner::new().plan(&btc_ladder()).unwrap();

        let notional: Decimal = plan.tranches.iter().map(|t| t.notional.amount()).sum();
        assert_eq!(plan.totals.notional.amount(), notional);
        assert_eq!(
            plan.totals.margin.amount(),
            round_currency(notional / dec!(10))
        );
    }

    #[test]
    fn metadata_records_effective_parameters() {
        let request = PyramidRequest {
            risk_shape: dec!(3),
            immediate_fill_pct: dec!(150),
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();

        assert_eq!(plan.metadata.risk_shape, RiskShape::LINEAR);
        assert_eq!(plan.metadata.immediate_fill_pct, dec!(100));
        assert_eq!(plan.metadata.effective_top, dec!(30000));
        assert_eq!(plan.metadata.levels, 2);
    }

    #[test]
    fn full_immediate_fill_leaves_nothing_for_the_ladder() {
        let request = PyramidRequest {
            immediate_fill_pct: dec!(100),
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();

        assert_eq!(plan.market_tranche().unwrap().risk.amount(), dec!(1000.00));
        assert!(plan.limit_tranches().all(|t| t.risk.is_zero()));
        assert_eq!(plan.totals.risk.amount(), dec!(1000.00));
    }

    #[test]
    fn flat_shape_spreads_risk_equally() {
        let request = PyramidRequest {
            levels: 4,
            immediate_fill_pct: Decimal::ZERO,
            risk_shape: Decimal::ZERO,
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();

        assert!(plan.market_tranche().is_none());
        assert_eq!(plan.tranches.len(), 4);
        assert!(plan.tranches.iter().all(|t| t.risk.amount() == dec!(250.00)));
        assert_eq!(
            plan.tranches.iter().map(|t| t.price).collect::<Vec<_>>(),
            vec![dec!(29875), dec!(29750), dec!(29625), dec!(29500)]
        );
    }

    #[test]
    fn leftover_cent_goes_to_the_last_tied_tranche() {
        let request = PyramidRequest {
            levels: 3,
            immediate_fill_pct: Decimal::ZERO,
            risk_shape: Decimal::ZERO,
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();
        let risks: Vec<Decimal> = plan.tranches.iter().map(|t| t.risk.amount()).collect();

        assert_eq!(risks, vec![dec!(333.33), dec!(333.33), dec!(333.34)]);
        assert_eq!(plan.totals.risk.amount(), dec!(1000.00));
    }

    #[test]
    fn explicit_top_overrides_live_price() {
        let request = PyramidRequest {
            top_price: Some(dec!(29900)),
            levels: 4,
            immediate_fill_pct: Decimal::ZERO,
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();

        assert_eq!(plan.metadata.effective_top, dec!(29900));
        assert_eq!(plan.tranches[0].price, dec!(29800));
        assert_eq!(plan.tranches[3].price, dec!(29500));
    }

    #[test]
    fn short_ladder_mirrors_long() {
        let request = PyramidRequest {
            stop_price: dec!(31000),
            bottom_price: dec!(30500),
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();

        assert_eq!(plan.side, Direction::Short);
        let limits: Vec<_> = plan.limit_tranches().collect();
        assert_eq!(limits[0].price, dec!(30250));
        assert_eq!(limits[1].price, dec!(30500));
        assert!(limits[1].risk > limits[0].risk);
        assert_eq!(plan.totals.risk.amount(), dec!(1000.00));
    }

    #[test]
    fn no_levels_and_no_immediate_fill_is_an_empty_plan() {
        let request = PyramidRequest {
            levels: 0,
            immediate_fill_pct: Decimal::ZERO,
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();

        assert!(plan.is_empty());
        assert_eq!(plan.totals, PlanTotals::default());
        assert!(plan.totals.margin.is_zero());
    }

    #[test]
    fn immediate_only_plan_allocates_its_share() {
        let request = PyramidRequest {
            levels: 0,
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();

        assert_eq!(plan.tranches.len(), 1);
        assert_eq!(plan.totals.risk.amount(), dec!(200.00));
        assert_eq!(plan.unallocated_risk().amount(), dec!(800.00));
    }

    #[test]
    fn stop_at_bottom_is_degenerate_at_last_level() {
        let request = PyramidRequest {
            bottom_price: dec!(29000),
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert_eq!(
            err,
            PlanningError::DegenerateStop {
                kind: TrancheKind::Limit,
                level: 2,
                price: dec!(29000),
            }
        );
    }

    #[test]
    fn live_price_on_stop_is_degenerate_market_tranche() {
        let request = PyramidRequest {
            top_price: Some(dec!(30000)),
            live_price: dec!(29000),
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert!(matches!(
            err,
            PlanningError::DegenerateStop {
                kind: TrancheKind::Market,
                level: 0,
                ..
            }
        ));
    }

    #[test_case(dec!(29500), dec!(29400) ; "bottom above top with stop below")]
    #[test_case(dec!(30000), dec!(30000) ; "bottom equals top")]
    fn inverted_range_is_rejected(bottom_price: Decimal, top: Decimal) {
        let request = PyramidRequest {
            top_price: Some(top),
            bottom_price,
            live_price: dec!(29400),
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidRange { .. }));
    }

    #[test_case(dec!(30000), dec!(30500) ; "bottom below top with stop above")]
    #[test_case(dec!(30500), dec!(30500) ; "bottom equals top")]
    fn inverted_short_range_is_rejected(bottom_price: Decimal, top: Decimal) {
        let request = PyramidRequest {
            stop_price: dec!(31000),
            top_price: Some(top),
            bottom_price,
            live_price: dec!(30500),
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert_eq!(
            err,
            PlanningError::InvalidRange {
                stop: dec!(31000),
                bottom: bottom_price,
                top,
            }
        );
    }

    #[test]
    fn stop_inside_range_is_rejected() {
        let request = PyramidRequest {
            stop_price: dec!(29700),
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidRange { .. }));
    }

    #[test]
    fn negative_levels_are_rejected() {
        let request = PyramidRequest {
            levels: -1,
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert_eq!(
            err,
            PlanningError::InvalidLevels {
                levels: -1,
                max: MAX_LEVELS,
            }
        );
    }

    #[test]
    fn level_count_above_limit_is_rejected() {
        let request = PyramidRequest {
            levels: i32::MAX,
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidLevels { levels: i32::MAX, .. }));

        let request = PyramidRequest {
            levels: 5,
            ..btc_ladder()
        };
        let planner = PyramidPlanner::with_max_levels(4);
        assert_eq!(
            planner.plan(&request).unwrap_err(),
            PlanningError::InvalidLevels { levels: 5, max: 4 }
        );
        let request = PyramidRequest {
            levels: 4,
            ..btc_ladder()
        };
        assert!(planner.plan(&request).is_ok());
    }

    #[test]
    fn quantity_uses_unrounded_risk_share() {
        let request = PyramidRequest {
            levels: 3,
            immediate_fill_pct: Decimal::ZERO,
            risk_shape: Decimal::ZERO,
            ..btc_ladder()
        };
        let plan = PyramidPlanner::new().plan(&request).unwrap();
        let quantities: Vec<Decimal> = plan.tranches.iter().map(|t| t.quantity.amount()).collect();

        // 333.33 each over 833.33, 666.67 and 500 of risk per unit
        assert_eq!(quantities, vec![dec!(0.4), dec!(0.5), dec!(0.666667)]);
        assert_eq!(plan.tranches[2].risk.amount(), dec!(333.34));
    }

    #[test]
    fn notional_overflow_in_totals_is_an_error() {
        let request = PyramidRequest {
            balance: dec!(600000000000000000000000000),
            risk_percent: dec!(100),
            stop_price: dec!(99),
            leverage: dec!(1),
            top_price: None,
            bottom_price: dec!(99.5),
            live_price: dec!(100),
            levels: 2,
            immediate_fill_pct: Decimal::ZERO,
            risk_shape: Decimal::ZERO,
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert_eq!(
            err,
            PlanningError::Overflow(ArithmeticOverflow {
                operation: "total notional",
            })
        );
    }

    #[test_case(dec!(0), dec!(1) ; "empty account")]
    #[test_case(dec!(100000), dec!(0) ; "zero risk percent")]
    fn non_positive_total_risk_is_rejected(balance: Decimal, risk_percent: Decimal) {
        let request = PyramidRequest {
            balance,
            risk_percent,
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert!(matches!(err, PlanningError::InvalidRisk { .. }));
    }

    #[test]
    fn leverage_is_checked_first() {
        let request = PyramidRequest {
            leverage: Decimal::ZERO,
            levels: -3,
            ..btc_ladder()
        };
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert_eq!(err, PlanningError::InvalidLeverage { value: Decimal::ZERO });
    }

    #[test_case("stop_price" ; "stop")]
    #[test_case("bottom_price" ; "bottom")]
    #[test_case("top_price" ; "top")]
    #[test_case("live_price" ; "live")]
    fn non_positive_prices_are_rejected(field: &'static str) {
        let mut request = btc_ladder();
        match field {
            "stop_price" => request.stop_price = Decimal::ZERO,
            "bottom_price" => request.bottom_price = Decimal::ZERO,
            "top_price" => request.top_price = Some(Decimal::ZERO),
            _ => request.live_price = Decimal::ZERO,
        }
        let err = PyramidPlanner::new().plan(&request).unwrap_err();
        assert_eq!(
            err,
            PlanningError::InvalidPrice {
                field,
                value: Decimal::ZERO,
            }
        );
    }
}
