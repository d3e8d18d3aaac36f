//! Defaults for pyramid planning requests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::pyramid_planning::MAX_LEVELS;

/// Values used when a pyramid request omits them.
///
/// Risk percent and leverage fall back to the `sizing` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidConfig {
    /// Number of limit levels.
    #[serde(default)]
    pub default_levels: i32,
    /// Percent of the total risk filled at the live price.
    #[serde(default)]
    pub default_immediate_fill_pct: Decimal,
    /// 0 = equal risk per level, 1 = linear toward the bottom.
    #[serde(default)]
    pub default_risk_shape: Decimal,
    /// Largest level count a request may ask for.
    #[serde(default = "default_max_levels")]
    pub max_levels: u32,
}

const fn default_max_levels() -> u32 {
    MAX_LEVELS
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            default_levels: 0,
            default_immediate_fill_pct: Decimal::ZERO,
            default_risk_shape: Decimal::ZERO,
            max_levels: default_max_levels(),
        }
    }
}
