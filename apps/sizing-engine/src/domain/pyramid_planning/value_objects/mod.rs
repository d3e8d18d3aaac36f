//! Pyramid Planning Value Objects

mod pyramid_plan;
mod pyramid_request;
mod risk_shape;
mod tranche;

pub use pyramid_plan::{PlanMetadata, PlanTotals, PyramidPlan};
pub use pyramid_request::PyramidRequest;
pub use risk_shape::RiskShape;
pub use tranche::{Tranche, TrancheKind};
