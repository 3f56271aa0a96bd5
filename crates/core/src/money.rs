//! Money helpers: hundredths rounding and fixed two-decimal formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places money values are rounded and displayed to.
pub const MONEY_SCALE: u32 = 2;

/// Round to the hundredths place, half away from zero (`0.125 -> 0.13`, `-0.125 -> -0.13`).
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a money value with exactly two decimals.
///
/// Values that round to zero render as `0.00`, never `-0.00`.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round2(value);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}
