//! Whole-unit fair-share targets for the bill distributor.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Allocation, BillCounts, Worker};

use super::tolerance::floor_with_epsilon;

/// A worker's fair share floored to a whole currency unit.
///
/// Because every share is floored, the targets of a group never add up to
/// more than the cash being split, and fall short of it by less than the
/// number of workers.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::integer_target;
/// use rust_decimal::Decimal;
///
/// // $100 over 40 hours, 10 of them worked by this person
/// let rate = Decimal::from(100) / Decimal::from(40);
/// assert_eq!(integer_target(rate, Decimal::from(10)).unwrap(), Decimal::from(25));
/// ```
pub fn integer_target(hourly_rate: Decimal, hours: Decimal) -> EngineResult<Decimal> {
    let share = hourly_rate
        .checked_mul(hours)
        .ok_or(EngineError::InputOutOfRange)?;
    Ok(floor_with_epsilon(share))
}

/// Builds an empty allocation for every worker, each carrying its target.
///
/// Every allocation's bills are keyed like `bill_template`.
pub fn build_allocations(
    workers: &[Worker],
    hourly_rate: Decimal,
    bill_template: &BillCounts,
) -> EngineResult<Vec<Allocation>> {
    workers
        .iter()
        .map(|worker| {
            Ok(Allocation {
                index: worker.index,
                name: worker.name.clone(),
                hours: worker.hours,
                target: integer_target(hourly_rate, worker.hours)?,
                bills: bill_template.zeroed_like(),
                assigned_total: Decimal::ZERO,
            })
        })
        .collect()
}
