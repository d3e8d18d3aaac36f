//! Position Sizing Value Objects

mod sizing_result;
mod trade_risk_parameters;

pub use sizing_result::{LeverageSafety, SizingResult};
pub use trade_risk_parameters::TradeRiskParameters;
