//! Position Sizing Bounded Context
//!
//! Sizes a single trade from an account balance, a risk percentage, an
//! entry/stop pair and a leverage factor.
//!
//! # Key Concepts
//!
//! - **Risk amount**: currency lost if the stop is hit (`balance * risk% / 100`)
//! - **Position size**: risk amount divided by the entry/stop distance
//! - **Margin**: notional divided by leverage
//! - **Leverage safety**: advisory comparison against `notional / risk`

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::SizingError;
pub use services::SizingCalculator;
pub use crate::domain::shared::Direction;
pub use value_objects::{LeverageSafety, SizingResult, TradeRiskParameters};
