//! Floating-point tolerance policy.
//!
//! Every comparison that needs slack goes through this module so target
//! computation and need comparison agree on the same epsilon.

use rust_decimal::Decimal;

/// Slack absorbed when flooring targets and comparing remaining needs (1e-6).
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Leftovers at or below this amount (0.009) are treated as nothing left.
pub const NOISE_THRESHOLD: Decimal = Decimal::from_parts(9, 0, 0, false, 3);

/// Slack added to the flat leftover allowance (0.0001).
pub const ALLOWANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Floors `x` after nudging it up by [`EPSILON`].
///
/// A share that is mathematically 7 but computed as 6.9999999 floors to 7.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::floor_with_epsilon;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let nearly_seven = Decimal::from_str("6.9999999").unwrap();
/// assert_eq!(floor_with_epsilon(nearly_seven), Decimal::from(7));
/// assert_eq!(floor_with_epsilon(Decimal::from_str("6.5").unwrap()), Decimal::from(6));
/// ```
pub fn floor_with_epsilon(x: Decimal) -> Decimal {
    (x + EPSILON).floor()
}

/// Returns true if `a >= b` once `a` is given [`EPSILON`] of slack.
pub fn approx_gte(a: Decimal, b: Decimal) -> bool {
    a + EPSILON >= b
}

/// Returns true if `a` is greater than `b` by more than [`EPSILON`].
///
/// Used as the strict tie-break: a candidate only displaces the current
/// best when it is clearly larger, so the earlier candidate wins near-ties.
pub fn exceeds(a: Decimal, b: Decimal) -> bool {
    a > b + EPSILON
}

/// Returns true if `amount` is indistinguishable from zero.
pub fn is_negligible(amount: Decimal) -> bool {
    amount <= NOISE_THRESHOLD
}
