//! Statutory half-hour rounding.

use rust_decimal::Decimal;

/// Floors an hour value to the nearest half-hour.
///
/// Statutory overtime is credited in half-hour increments: `7.75` hours
/// become `7.5`, `1.99` hours become `1.5`. Negative inputs (which can only
/// arise from malformed upstream data) are clamped to zero rather than
/// propagated, so aggregate sums stay well-formed.
///
/// The function is idempotent and monotonic, and never rounds up:
/// `statutory_round(h) <= h` for all `h >= 0`.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::statutory_round;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = Decimal::from_str("2.75").unwrap();
/// assert_eq!(statutory_round(hours), Decimal::from_str("2.5").unwrap());
///
/// let exact = Decimal::from_str("2.0").unwrap();
/// assert_eq!(statutory_round(exact), exact);
/// ```
pub fn statutory_round(hours: Decimal) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (hours * Decimal::TWO).floor() / Decimal::TWO
}
