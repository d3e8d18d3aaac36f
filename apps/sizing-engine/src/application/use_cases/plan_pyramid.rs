//! Plan Pyramid Use Case

use tracing::{debug, info, warn};

use crate::application::dto::{OrderIntentDto, PlanPyramidRequestDto, PlanPyramidResponseDto};
use crate::config::{PyramidConfig, SizingConfig};
use crate::domain::pyramid_planning::PyramidPlanner;
use crate::error::EngineError;

/// Use case for planning a pyramid entry.
#[derive(Debug, Clone)]
pub struct PlanPyramidUseCase {
    planner: PyramidPlanner,
    sizing: SizingConfig,
    pyramid: PyramidConfig,
}

impl Default for PlanPyramidUseCase {
    fn default() -> Self {
        Self::new(SizingConfig::default(), PyramidConfig::default())
    }
}

impl PlanPyramidUseCase {
    /// Create a new PlanPyramidUseCase.
    #[must_use]
    pub const fn new(sizing: SizingConfig, pyramid: PyramidConfig) -> Self {
        Self {
            planner: PyramidPlanner::with_max_levels(pyramid.max_levels),
            sizing,
            pyramid,
        }
    }

    /// Execute the use case.
    pub fn execute(
        &self,
        request: &PlanPyramidRequestDto,
    ) -> Result<PlanPyramidResponseDto, EngineError> {
        let domain = request.to_domain(&self.sizing, &self.pyramid);

        debug!(
            balance = %domain.balance,
            risk_percent = %domain.risk_percent,
            stop_price = %domain.stop_price,
            top_price = %domain.effective_top(),
            bottom_price = %domain.bottom_price,
            live_price = %domain.live_price,
            levels = domain.levels,
            immediate_fill_pct = %domain.immediate_fill_pct,
            risk_shape = %domain.risk_shape,
            "Planning pyramid"
        );

        let plan = self.planner.plan(&domain).map_err(|e| {
            debug!(error = %e, "Pyramid plan rejected");
            EngineError::from(e)
        })?;

        info!(
            side = %plan.side,
            tranches = plan.tranches.len(),
            total_risk = %plan.totals.risk,
            total_notional = %plan.totals.notional,
            total_margin = %plan.totals.margin,
            "Pyramid planned"
        );

        let margin_exceeds_balance = plan.totals.margin.amount() > domain.balance;
        if margin_exceeds_balance {
            warn!(
                total_margin = %plan.totals.margin,
                balance = %domain.balance,
                "Plan margin exceeds balance"
            );
        }

        let order_intents = request
            .symbol
            .as_deref()
            .map(|symbol| {
                OrderIntentDto::from_plan(symbol, &plan, domain.stop_price, domain.leverage)
            })
            .unwrap_or_default();

        Ok(PlanPyramidResponseDto {
            plan,
            margin_exceeds_balance,
            order_intents,
        })
    }
}
