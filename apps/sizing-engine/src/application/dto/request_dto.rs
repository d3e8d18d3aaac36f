//! Tagged request and outcome DTOs for batch evaluation.

use serde::{Deserialize, Serialize};

use super::{
    PlanPyramidRequestDto, PlanPyramidResponseDto, SizePositionRequestDto,
    SizePositionResponseDto,
};
use crate::error::{EngineError, ErrorBody};

/// One request, discriminated by its `kind` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineRequestDto {
    /// Size a single trade.
    Sizing(SizePositionRequestDto),
    /// Plan a pyramid entry.
    Pyramid(PlanPyramidRequestDto),
}

/// Successful response, tagged like the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EngineResponseDto {
    /// Sizing response.
    Sizing(SizePositionResponseDto),
    /// Pyramid response.
    Pyramid(PlanPyramidResponseDto),
}

/// Per-request outcome: `{"ok": ...}` or `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineOutcomeDto {
    /// The request succeeded.
    Ok(Box<EngineResponseDto>),
    /// The request was rejected.
    Error(ErrorBody),
}

impl EngineOutcomeDto {
    /// True for a successful outcome.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

impl From<Result<EngineResponseDto, EngineError>> for EngineOutcomeDto {
    fn from(result: Result<EngineResponseDto, EngineError>) -> Self {
        match result {
            Ok(response) => Self::Ok(Box::new(response)),
            Err(err) => Self::Error(err.to_body()),
        }
    }
}
