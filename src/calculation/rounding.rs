//! Two-decimal rounding shared by both engines.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to 2 decimal places, with midpoints rounded away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(round_half_up(dec("2.675")), dec("2.68"));
/// assert_eq!(round_half_up(dec("8.333")), dec("8.33"));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
