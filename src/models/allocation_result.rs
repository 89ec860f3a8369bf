//! Result models for the exact divider and the bill distributor.
//!
//! This module contains [`DivisionResult`] and [`DistributionResult`] along
//! with the per-worker rows and the audit trace that records how each
//! figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BillCounts;

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that do not stop the run but that the
/// operator should see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The audit trace for one run.
///
/// Carries no timestamps or generated ids so that identical inputs always
/// produce identical traces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the number the next step should carry.
    pub fn next_step_number(&self) -> u32 {
        u32::try_from(self.steps.len()).map_or(u32::MAX, |count| count.saturating_add(1))
    }
}

/// One worker's share from the exact divider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAmount {
    /// Row position of the worker.
    pub index: usize,
    /// The worker's name.
    pub name: String,
    /// Hours worked.
    pub hours: Decimal,
    /// Share rounded to the cent.
    pub amount: Decimal,
}

/// Output of the exact divider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionResult {
    /// The tip total that was divided.
    pub total_cash: Decimal,
    /// Sum of the valid workers' hours.
    pub total_hours: Decimal,
    /// Cash per hour worked, unrounded.
    pub hourly_rate: Decimal,
    /// One entry per valid worker, in row order.
    pub per_worker: Vec<WorkerAmount>,
    /// Sum of the rounded shares; may differ from `total_cash` by a few cents.
    pub total_paid: Decimal,
    /// How the figures were reached.
    pub audit: AuditTrace,
}

impl DivisionResult {
    /// Returns the share for the worker at row `index`.
    pub fn amount_for(&self, index: usize) -> Option<Decimal> {
        self.per_worker
            .iter()
            .find(|entry| entry.index == index)
            .map(|entry| entry.amount)
    }
}

/// One worker's bills from the distributor.
///
/// `assigned_total` never exceeds `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Row position of the worker.
    pub index: usize,
    /// The worker's name.
    pub name: String,
    /// Hours worked.
    pub hours: Decimal,
    /// Fair share floored to a whole currency unit.
    pub target: Decimal,
    /// Bills handed to this worker, largest face value first.
    pub bills: BillCounts,
    /// Cash value of `bills`.
    pub assigned_total: Decimal,
}

impl Allocation {
    /// How much more this worker could take without passing their target.
    pub fn remaining_need(&self) -> Decimal {
        self.target - self.assigned_total
    }
}

/// A note attached to a successful distribution whose leftover cannot be
/// split with whole bills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// The cash left unassigned.
    pub leftover: Decimal,
    /// Text for the operator.
    pub message: String,
}

impl Advisory {
    /// Builds the advisory for `leftover`.
    pub fn for_leftover(leftover: Decimal) -> Self {
        let mut shown = leftover.round_dp(2);
        shown.rescale(2);
        Self {
            leftover,
            message: format!(
                "Leftover: ${shown} cannot be evenly distributed using whole bills (no coins). Flip for it!"
            ),
        }
    }
}

/// Output of the bill distributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// Cash value of the inventory.
    pub total_cash: Decimal,
    /// Sum of the valid workers' hours.
    pub total_hours: Decimal,
    /// Cash per hour worked, unrounded.
    pub hourly_rate: Decimal,
    /// One entry per valid worker, in row order.
    pub per_worker: Vec<Allocation>,
    /// Cash actually handed out.
    pub total_paid: Decimal,
    /// Cash left unassigned: `total_cash - total_paid`.
    pub leftover: Decimal,
    /// Present when a small leftover must be settled out of band.
    pub advisory: Option<Advisory>,
    /// How the figures were reached.
    pub audit: AuditTrace,
}

impl DistributionResult {
    /// Returns the allocation for the worker at row `index`.
    pub fn allocation_for(&self, index: usize) -> Option<&Allocation> {
        self.per_worker.iter().find(|entry| entry.index == index)
    }
}
