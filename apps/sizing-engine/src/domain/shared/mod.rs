//! Shared Domain Types
//!
//! Value objects, input checks and errors shared across bounded contexts.

pub mod errors;
pub mod validation;
pub mod value_objects;

pub use errors::{ArithmeticOverflow, InputViolation};
pub use value_objects::{CURRENCY_DP, Direction, Money, QUANTITY_DP, Quantity, round_currency};
