//! Greedy largest-bill-first assignment.
//!
//! Denominations are processed strictly in descending face value. Each
//! bill goes to the worker with the largest remaining need that can still
//! absorb the whole bill; a bill nobody can absorb stays unassigned and is
//! never retried. This is a single deterministic pass, not an optimal
//! packing search.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Allocation, BillCounts, DenominationInventory};

use super::tolerance::{approx_gte, exceeds};

/// What the greedy pass handed out and what it could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSummary {
    /// Cash placed with workers.
    pub assigned_total: Decimal,
    /// Bills no worker could absorb, largest face value first.
    pub unassigned: BillCounts,
}

/// Picks the worker who should receive a bill of `face_value`.
///
/// Among workers whose remaining need covers the bill, the one with the
/// largest need wins. A later worker must beat the current best by more
/// than the tolerance, so ties go to the earlier worker.
pub fn select_recipient(allocations: &[Allocation], face_value: Decimal) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_need = Decimal::ZERO;

    for (position, allocation) in allocations.iter().enumerate() {
        let need = allocation.remaining_need();
        if approx_gte(need, face_value) && exceeds(need, best_need) {
            best_need = need;
            best = Some(position);
        }
    }

    best
}

/// Hands out every bill in `inventory`, one at a time.
///
/// No allocation ever passes its target: a bill is only given to a worker
/// whose remaining need is at least its face value.
///
/// Needs only shrink as bills are handed out, so once one bill of a
/// denomination finds no taker, the rest of that denomination cannot
/// either and is counted as unassigned in one step.
pub fn assign_bills(
    allocations: &mut [Allocation],
    inventory: &DenominationInventory,
) -> EngineResult<AssignmentSummary> {
    let mut assigned_total = Decimal::ZERO;
    let mut unassigned = inventory.counts().zeroed_like();

    for entry in inventory.counts().iter() {
        let face_value = Decimal::from(entry.face_value);

        for handed_out in 0..entry.count {
            let Some(position) = select_recipient(allocations, face_value) else {
                let skipped = entry.count - handed_out;
                debug!(
                    face_value = entry.face_value,
                    skipped, "No worker can absorb remaining bills"
                );
                unassigned.add_many(entry.face_value, skipped)?;
                break;
            };

            let recipient = &mut allocations[position];
            recipient.bills.add_one(entry.face_value)?;
            recipient.assigned_total += face_value;
            assigned_total += face_value;
        }
    }

    Ok(AssignmentSummary {
        assigned_total,
        unassigned,
    })
}
