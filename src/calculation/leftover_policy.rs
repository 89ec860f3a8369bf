//! Leftover acceptance after the greedy pass.
//!
//! A small shortfall is something a group settles by flipping a coin; a
//! large one means the drawer holds bills too coarse for the group and the
//! operator has to break some before running again.

use rust_decimal::Decimal;

use crate::config::{LeftoverConfig, LeftoverPolicy};

use super::tolerance::{ALLOWANCE_TOLERANCE, is_negligible};

/// The decision reached for a leftover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftoverVerdict {
    /// Nothing meaningful is left over.
    Settled,
    /// A small leftover remains; accept the result with an advisory.
    Advisory(Decimal),
    /// Too much is left over; discard the result.
    Rejected(Decimal),
}

/// Decides whether `leftover` cash is acceptable for `worker_count` workers.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::{LeftoverVerdict, evaluate_leftover};
/// use gratuity_engine::config::{LeftoverConfig, LeftoverPolicy};
/// use rust_decimal::Decimal;
///
/// let config = LeftoverConfig::default();
/// assert_eq!(evaluate_leftover(Decimal::ZERO, 3, &config), LeftoverVerdict::Settled);
/// assert_eq!(
///     evaluate_leftover(Decimal::from(6), 8, &config),
///     LeftoverVerdict::Advisory(Decimal::from(6))
/// );
///
/// let flat = LeftoverConfig { policy: LeftoverPolicy::FlatAllowance, ..config };
/// assert_eq!(
///     evaluate_leftover(Decimal::from(6), 8, &flat),
///     LeftoverVerdict::Rejected(Decimal::from(6))
/// );
/// ```
pub fn evaluate_leftover(
    leftover: Decimal,
    worker_count: usize,
    config: &LeftoverConfig,
) -> LeftoverVerdict {
    if is_negligible(leftover) {
        return LeftoverVerdict::Settled;
    }

    let within_allowance = leftover <= config.flat_allowance + ALLOWANCE_TOLERANCE;
    let accepted = match config.policy {
        LeftoverPolicy::FlatAllowance => within_allowance,
        LeftoverPolicy::GroupSizeAware => within_allowance || leftover < Decimal::from(worker_count),
    };

    if accepted {
        LeftoverVerdict::Advisory(leftover)
    } else {
        LeftoverVerdict::Rejected(leftover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config(policy: LeftoverPolicy) -> LeftoverConfig {
        LeftoverConfig {
            policy,
            flat_allowance: dec("4"),
        }
    }

    #[test]
    fn test_noise_is_settled() {
        for policy in [LeftoverPolicy::FlatAllowance, LeftoverPolicy::GroupSizeAware] {
            assert_eq!(
                evaluate_leftover(dec("0.005"), 1, &config(policy)),
                LeftoverVerdict::Settled
            );
        }
    }

    #[test]
    fn test_allowance_boundary_is_inclusive() {
        let flat = config(LeftoverPolicy::FlatAllowance);
        assert_eq!(
            evaluate_leftover(dec("4"), 1, &flat),
            LeftoverVerdict::Advisory(dec("4"))
        );
        assert_eq!(
            evaluate_leftover(dec("5"), 1, &flat),
            LeftoverVerdict::Rejected(dec("5"))
        );
    }

    #[test]
    fn test_group_size_aware_accepts_leftover_below_worker_count() {
        let aware = config(LeftoverPolicy::GroupSizeAware);
        assert_eq!(
            evaluate_leftover(dec("9"), 10, &aware),
            LeftoverVerdict::Advisory(dec("9"))
        );
        assert_eq!(
            evaluate_leftover(dec("10"), 10, &aware),
            LeftoverVerdict::Rejected(dec("10"))
        );
    }

    #[test]
    fn test_flat_allowance_ignores_group_size() {
        let flat = config(LeftoverPolicy::FlatAllowance);
        assert_eq!(
            evaluate_leftover(dec("9"), 10, &flat),
            LeftoverVerdict::Rejected(dec("9"))
        );
    }

    #[test]
    fn test_small_group_uses_allowance() {
        let aware = config(LeftoverPolicy::GroupSizeAware);
        assert_eq!(
            evaluate_leftover(dec("3"), 2, &aware),
            LeftoverVerdict::Advisory(dec("3"))
        );
        assert_eq!(
            evaluate_leftover(dec("20"), 2, &aware),
            LeftoverVerdict::Rejected(dec("20"))
        );
    }
}
