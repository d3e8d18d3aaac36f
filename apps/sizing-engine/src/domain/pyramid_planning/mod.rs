//! Pyramid Planning Bounded Context
//!
//! Splits one risk budget into an optional immediate market fill plus a
//! ladder of limit orders stepping from a top price toward a bottom price,
//! all sharing a single stop.
//!
//! # Key Concepts
//!
//! - **Immediate fill**: share of the total risk filled at the live price
//! - **Ladder**: evenly spaced limit levels, top exclusive, bottom inclusive
//! - **Risk shape**: 0 spreads risk equally, 1 weights it linearly toward the bottom
//! - **Side**: long when the ladder walks down toward a stop below it, short otherwise

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::PlanningError;
pub use services::{MAX_LEVELS, PyramidPlanner};
pub use value_objects::{
    PlanMetadata, PlanTotals, PyramidPlan, PyramidRequest, RiskShape, Tranche, TrancheKind,
};
