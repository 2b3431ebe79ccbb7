//! Decimal rounding shared by every monetary and percentage computation.
//!
//! One rule is used throughout: round half away from zero on the scaled
//! value. Zone and fleet totals are only reproducible when every stage
//! rounds the same way.

/// Decimal places used for currency amounts.
pub const CURRENCY_PLACES: i32 = 2;

/// Decimal places used for percentages.
pub const PERCENT_PLACES: i32 = 1;

/// Round `value` to `places` decimal places, halves away from zero.
///
/// # Examples
/// ```
/// use lastmile_core::rounding::round_to;
///
/// assert_eq!(round_to(100.295, 1), 100.3);
/// assert_eq!(round_to(-1.25, 1), -1.3);
/// ```
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Round a currency amount to cents.
#[must_use]
pub fn round_currency(value: f64) -> f64 {
    round_to(value, CURRENCY_PLACES)
}

/// Round a percentage to one decimal place.
#[must_use]
pub fn round_percent(value: f64) -> f64 {
    round_to(value, PERCENT_PLACES)
}

/// Express `part` as a percentage of `whole`, or zero when `whole` is not
/// positive.
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round_percent(part / whole * 100.0)
    } else {
        0.0
    }
}
