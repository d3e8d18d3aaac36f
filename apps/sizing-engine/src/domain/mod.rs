//! Domain Layer
//!
//! Pure calculation logic with no I/O. Every operation takes fully supplied
//! inputs and returns a value or a typed error.
//!
//! # Bounded Contexts
//!
//! - [`position_sizing`]: Single-entry position size, margin and leverage safety
//! - [`pyramid_planning`]: Multi-tranche entry plans across a price ladder

pub mod position_sizing;
pub mod pyramid_planning;
pub mod shared;
