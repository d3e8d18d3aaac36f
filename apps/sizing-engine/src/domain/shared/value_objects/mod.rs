//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod direction;
mod money;
mod quantity;

pub use direction::Direction;
pub use money::{CURRENCY_DP, Money, round_currency};
pub use quantity::{QUANTITY_DP, Quantity};
