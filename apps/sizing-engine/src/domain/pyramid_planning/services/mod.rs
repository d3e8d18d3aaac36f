//! Pyramid Planning Domain Services

mod ladder;
mod pyramid_planner;

pub use ladder::{apportion, price_grid};
pub use pyramid_planner::{MAX_LEVELS, PyramidPlanner};
