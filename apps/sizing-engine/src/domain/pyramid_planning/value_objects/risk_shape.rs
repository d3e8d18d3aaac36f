//! Risk shape: how ladder risk is spread across levels.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpolation between equal weighting (0) and linear weighting toward the
/// bottom level (1). Always held in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskShape(Decimal);

impl RiskShape {
    /// Equal risk on every level.
    pub const FLAT: Self = Self(Decimal::ZERO);

    /// Risk proportional to level index, heaviest at the bottom.
    pub const LINEAR: Self = Self(Decimal::ONE);

    /// Create a risk shape, clamping the value into `[0, 1]`.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value.clamp(Decimal::ZERO, Decimal::ONE))
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Normalized weights for `levels` ladder levels, index 0 nearest the top.
    ///
    /// Level `i` (1-based) gets `(1 - s) / L + s * i / (L(L+1)/2)` before
    /// normalization; a single level always gets the whole weight.
    #[must_use]
    pub fn weights(&self, levels: u32) -> Vec<Decimal> {
        match levels {
            0 => Vec::new(),
            1 => vec![Decimal::ONE],
            _ => {
                let count = Decimal::from(levels);
                let triangular = count * (count + Decimal::ONE) / Decimal::TWO;
                let flat = (Decimal::ONE - self.0) / count;

                let raw: Vec<Decimal> = (1..=levels)
                    .map(|i| flat + self.0 * Decimal::from(i) / triangular)
                    .collect();
                let total: Decimal = raw.iter().sum();

                raw.into_iter().map(|w| w / total).collect()
            }
        }
    }
}

impl Default for RiskShape {
    fn default() -> Self {
        Self::FLAT
    }
}

impl fmt::Display for RiskShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
