//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Use Cases**: Default resolution, logging and DTO mapping
//! - **DTOs**: Data transfer objects for the batch boundary and order intents

pub mod dto;
pub mod use_cases;

pub use dto::*;
pub use use_cases::*;
