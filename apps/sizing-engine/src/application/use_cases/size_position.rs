//! Size Position Use Case

use tracing::{debug, info, warn};

use crate::application::dto::{OrderIntentDto, SizePositionRequestDto, SizePositionResponseDto};
use crate::config::SizingConfig;
use crate::domain::position_sizing::{LeverageSafety, SizingCalculator};
use crate::error::EngineError;

/// Use case for sizing a single trade.
#[derive(Debug, Clone, Default)]
pub struct SizePositionUseCase {
    calculator: SizingCalculator,
    defaults: SizingConfig,
}

impl SizePositionUseCase {
    /// Create a new SizePositionUseCase.
    #[must_use]
    pub const fn new(defaults: SizingConfig) -> Self {
        Self {
            calculator: SizingCalculator::new(),
            defaults,
        }
    }

    /// Execute the use case.
    pub fn execute(
        &self,
        request: &SizePositionRequestDto,
    ) -> Result<SizePositionResponseDto, EngineError> {
        let params = request.to_domain(&self.defaults);

        debug!(
            balance = %request.balance,
            risk_percent = %params.risk_percent,
            leverage = %params.leverage,
            entry_price = %params.entry_price,
            stop_loss_price = %params.stop_loss_price,
            "Sizing position"
        );

        let result = self.calculator.size(request.balance, &params).map_err(|e| {
            debug!(error = %e, "Sizing rejected");
            EngineError::from(e)
        })?;

        info!(
            direction = %result.direction,
            position_size = %result.position_size,
            risk_amount = %result.risk_amount,
            notional_value = %result.notional_value,
            margin_required = %result.margin_required,
            "Position sized"
        );

        if let LeverageSafety::Unsafe {
            requested,
            max_safe,
        } = result.leverage_safety()
        {
            warn!(
                leverage = %requested,
                max_safe_leverage = %max_safe,
                "Leverage exceeds safe bound"
            );
        }

        let margin_exceeds_balance = result.exceeds_balance(request.balance);
        if margin_exceeds_balance {
            warn!(
                margin_required = %result.margin_required,
                balance = %request.balance,
                "Required margin exceeds balance"
            );
        }

        let order_intents = request
            .symbol
            .as_deref()
            .map(|symbol| {
                vec![OrderIntentDto::from_sizing(
                    symbol,
                    request.order_type,
                    &result,
                    &params,
                )]
            })
            .unwrap_or_default();

        Ok(SizePositionResponseDto {
            result,
            margin_exceeds_balance,
            order_intents,
        })
    }
}
