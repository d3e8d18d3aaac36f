// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Sizing Engine - Rust Core Library
//!
//! Deterministic position sizing and pyramid planning. Every calculation is
//! a pure function of its inputs: no prices are fetched, no orders placed,
//! nothing persisted.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Calculation logic and value objects
//!   - `position_sizing`: Single-trade size, margin and leverage safety
//!   - `pyramid_planning`: Immediate fill plus a limit-order ladder
//!   - `shared`: `Money`, `Quantity`, `Direction`, checked arithmetic
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `SizePosition`, `PlanPyramid`, `EvaluateBatch`
//!   - `dto`: Request/response DTOs and venue-neutral order intents
//!
//! - **Config**: YAML defaults with environment interpolation
//! - **Telemetry**: `tracing` subscriber setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Pure calculation logic with no I/O.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Configuration loading and validation.
pub mod config;

/// Engine-level errors and codes.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::position_sizing::{
    LeverageSafety, SizingCalculator, SizingError, SizingResult, TradeRiskParameters,
};
pub use domain::pyramid_planning::{
    PlanMetadata, PlanTotals, PlanningError, PyramidPlan, PyramidPlanner, PyramidRequest,
    RiskShape, Tranche, TrancheKind,
};
pub use domain::shared::{Direction, Money, Quantity};

// Application re-exports
pub use application::dto::{
    EngineOutcomeDto, EngineRequestDto, EngineResponseDto, OrderIntentDto, OrderSide, OrderType,
    PlanPyramidRequestDto, PlanPyramidResponseDto, SizePositionRequestDto,
    SizePositionResponseDto,
};
pub use application::use_cases::{EvaluateBatchUseCase, PlanPyramidUseCase, SizePositionUseCase};

// Error re-exports
pub use config::{Config, ConfigError};
pub use error::{EngineError, ErrorCode};
