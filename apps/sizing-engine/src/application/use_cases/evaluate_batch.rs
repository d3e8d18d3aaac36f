//! Evaluate Batch Use Case

use serde_json::Value;
use tracing::{debug, error, info};

use super::{PlanPyramidUseCase, SizePositionUseCase};
use crate::application::dto::{EngineOutcomeDto, EngineRequestDto, EngineResponseDto};
use crate::config::Config;
use crate::error::EngineError;

/// Use case for evaluating a JSON document of tagged requests.
///
/// A document is either one request object or an array of them. Each
/// request yields exactly one outcome, in input order; a bad request does
/// not stop the ones after it.
#[derive(Debug, Clone, Default)]
pub struct EvaluateBatchUseCase {
    sizing: SizePositionUseCase,
    pyramid: PlanPyramidUseCase,
}

impl EvaluateBatchUseCase {
    /// Create a new EvaluateBatchUseCase from loaded configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            sizing: SizePositionUseCase::new(config.sizing.clone()),
            pyramid: PlanPyramidUseCase::new(config.sizing.clone(), config.pyramid.clone()),
        }
    }

    /// Evaluate a whole document.
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_REQUEST` error only when the document itself is
    /// not JSON. Per-request failures are reported as error outcomes.
    pub fn execute(&self, document: &str) -> Result<Vec<EngineOutcomeDto>, EngineError> {
        let value: Value = serde_json::from_str(document)?;

        let requests = match value {
            Value::Array(items) => items,
            other => vec![other],
        };

        let outcomes: Vec<EngineOutcomeDto> = requests
            .into_iter()
            .enumerate()
            .map(|(index, request)| {
                debug!(index, "Evaluating request");
                self.evaluate(request)
            })
            .collect();

        let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
        info!(
            requests = outcomes.len(),
            succeeded,
            failed = outcomes.len() - succeeded,
            "Batch evaluated"
        );

        Ok(outcomes)
    }

    /// Evaluate a single request value.
    pub fn evaluate(&self, request: Value) -> EngineOutcomeDto {
        let result = self.dispatch(request);
        if let Err(err) = &result {
            if err.code().is_client_error() {
                debug!(code = %err.code(), error = %err, "Request rejected");
            } else {
                error!(code = %err.code(), error = %err, "Request failed");
            }
        }
        result.into()
    }

    fn dispatch(&self, request: Value) -> Result<EngineResponseDto, EngineError> {
        let request: EngineRequestDto = serde_json::from_value(request)?;

        match request {
            EngineRequestDto::Sizing(dto) => {
                self.sizing.execute(&dto).map(EngineResponseDto::Sizing)
            }
            EngineRequestDto::Pyramid(dto) => {
                self.pyramid.execute(&dto).map(EngineResponseDto::Pyramid)
            }
        }
    }
}
