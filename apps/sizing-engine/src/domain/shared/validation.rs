//! Input checks and overflow-checked arithmetic shared by both calculators.

use rust_decimal::Decimal;

use super::errors::{ArithmeticOverflow, InputViolation};

/// One hundred, for percentage conversions.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Require a strictly positive price.
pub fn ensure_positive_price(field: &'static str, value: Decimal) -> Result<(), InputViolation> {
    if value <= Decimal::ZERO {
        return Err(InputViolation::NonPositivePrice { field, value });
    }
    Ok(())
}

/// Require strictly positive leverage.
pub fn ensure_positive_leverage(value: Decimal) -> Result<(), InputViolation> {
    if value <= Decimal::ZERO {
        return Err(InputViolation::NonPositiveLeverage { value });
    }
    Ok(())
}

/// Risk budget in currency: `balance * risk_percent / 100`.
pub fn risk_budget(balance: Decimal, risk_percent: Decimal) -> Result<Decimal, ArithmeticOverflow> {
    let scaled = mul(balance, risk_percent, "risk amount")?;
    div(scaled, HUNDRED, "risk amount")
}

/// Checked addition.
pub fn add(
    lhs: Decimal,
    rhs: Decimal,
    operation: &'static str,
) -> Result<Decimal, ArithmeticOverflow> {
    lhs.checked_add(rhs)
        .ok_or(ArithmeticOverflow { operation })
}

/// Checked multiplication.
pub fn mul(
    lhs: Decimal,
    rhs: Decimal,
    operation: &'static str,
) -> Result<Decimal, ArithmeticOverflow> {
    lhs.checked_mul(rhs)
        .ok_or(ArithmeticOverflow { operation })
}

/// Checked division. Division by zero is reported as overflow; callers
/// validate divisors beforehand so this only fires on range errors.
pub fn div(
    lhs: Decimal,
    rhs: Decimal,
    operation: &'static str,
) -> Result<Decimal, ArithmeticOverflow> {
    lhs.checked_div(rhs)
        .ok_or(ArithmeticOverflow { operation })
}
