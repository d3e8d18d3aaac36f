//! Application Use Cases
//!
//! Use cases apply configured defaults, call the domain services, log the
//! outcome and map it into DTOs.

mod evaluate_batch;
mod plan_pyramid;
mod size_position;

pub use evaluate_batch::EvaluateBatchUseCase;
pub use plan_pyramid::PlanPyramidUseCase;
pub use size_position::SizePositionUseCase;
