//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod order_intent_dto;
mod pyramid_dto;
mod request_dto;
mod sizing_dto;

pub use order_intent_dto::{OrderIntentDto, OrderSide, OrderType};
pub use pyramid_dto::{PlanPyramidRequestDto, PlanPyramidResponseDto};
pub use request_dto::{EngineOutcomeDto, EngineRequestDto, EngineResponseDto};
pub use sizing_dto::{SizePositionRequestDto, SizePositionResponseDto};
