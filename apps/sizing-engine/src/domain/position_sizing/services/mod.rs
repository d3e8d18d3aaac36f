//! Position Sizing Domain Services

mod sizing_calculator;

pub use sizing_calculator::SizingCalculator;
