//! Ladder price grid and risk apportionment.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::shared::{ArithmeticOverflow, CURRENCY_DP};
use crate::domain::shared::validation::{div, mul};

/// Evenly spaced prices from `top` (exclusive) to `bottom` (inclusive).
///
/// Works for both sides: a long ladder walks down from the top, a short
/// ladder walks up. Index 0 is the level nearest the top; the last level is
/// exactly `bottom`.
pub fn price_grid(
    top: Decimal,
    bottom: Decimal,
    levels: u32,
) -> Result<Vec<Decimal>, ArithmeticOverflow> {
    let span = bottom - top;
    let count = Decimal::from(levels);

    (1..=levels)
        .map(|i| {
            let offset = div(mul(span, Decimal::from(i), "ladder price")?, count, "ladder price")?;
            Ok((top + offset).normalize())
        })
        .collect()
}

/// Split `target` into whole cents proportionally to non-negative `raw`
/// amounts (largest remainder method).
///
/// Every amount is truncated to cents first; the cents still missing go one
/// each to the largest truncation remainders, ties to the later entry. The
/// result never goes negative and sums to `target` exactly whenever `target`
/// is `raw`'s sum rounded to cents.
pub fn apportion(raw: &[Decimal], target: Decimal) -> Vec<Decimal> {
    let cent = Decimal::new(1, CURRENCY_DP);
    let mut amounts: Vec<Decimal> = raw
        .iter()
        .map(|r| r.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::ToZero))
        .collect();

    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| {
        let rem_a = raw[a] - amounts[a];
        let rem_b = raw[b] - amounts[b];
        rem_b.cmp(&rem_a).then(b.cmp(&a))
    });

    let mut shortfall = target - amounts.iter().copied().sum::<Decimal>();
    for index in order {
        if shortfall < cent {
            break;
        }
        amounts[index] += cent;
        shortfall -= cent;
    }

    amounts
}
