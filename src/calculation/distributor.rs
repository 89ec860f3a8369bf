//! Bill distributor: splits a drawer of bills by hours using whole bills only.
//!
//! The run validates input, computes the hourly rate, floors every
//! worker's share to a whole-unit target, hands bills out greedily, and
//! finally decides whether the leftover is acceptable.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::{EngineConfig, LeftoverPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Advisory, AuditStep, AuditTrace, AuditWarning, BillCounts, DenominationInventory,
    DistributionResult, Worker,
};

use super::greedy_assignment::assign_bills;
use super::leftover_policy::{LeftoverVerdict, evaluate_leftover};
use super::targets::build_allocations;
use super::validation::validate_distribution_input;

/// Distributes the bills in `inventory` across `workers` by hours.
///
/// # Errors
///
/// `NoValidWorkers`, `NonPositiveHours` or `NoBills` when validation fails,
/// and `LeftoverTooLarge` when the leftover policy refuses the result. A
/// refused run returns no allocations at all.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::compute_distribution;
/// use gratuity_engine::config::EngineConfig;
/// use gratuity_engine::models::{DenominationInventory, Worker};
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// let inventory =
///     DenominationInventory::from_counts(config.denominations(), [(5, 1), (1, 2)]).unwrap();
/// let workers = vec![Worker::new(0, "Ana", Decimal::from(6))];
///
/// let result = compute_distribution(&workers, &inventory, &config).unwrap();
/// assert_eq!(result.per_worker[0].assigned_total, Decimal::from(7));
/// assert!(result.leftover.is_zero());
/// assert!(result.advisory.is_none());
/// ```
pub fn compute_distribution(
    workers: &[Worker],
    inventory: &DenominationInventory,
    config: &EngineConfig,
) -> EngineResult<DistributionResult> {
    let input = validate_distribution_input(workers, inventory)?;
    let hourly_rate = input.hourly_rate()?;
    let mut audit = AuditTrace::default();

    audit.steps.push(AuditStep {
        step_number: audit.next_step_number(),
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        input: serde_json::json!({
            "total_cash": input.total_cash.to_string(),
            "total_hours": input.total_hours.to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": hourly_rate.to_string()
        }),
        reasoning: format!(
            "${} / {} hours = ${} per hour",
            input.total_cash,
            input.total_hours,
            hourly_rate.round_dp(2)
        ),
    });

    let mut allocations = build_allocations(&input.workers, hourly_rate, inventory.counts())?;
    let target_sum: Decimal = allocations.iter().map(|allocation| allocation.target).sum();
    debug!(
        hourly_rate = %hourly_rate,
        target_sum = %target_sum,
        worker_count = allocations.len(),
        "Computed integer targets"
    );

    audit.steps.push(AuditStep {
        step_number: audit.next_step_number(),
        rule_id: "integer_targets".to_string(),
        rule_name: "Whole-Unit Targets".to_string(),
        input: serde_json::json!({
            "hourly_rate": hourly_rate.to_string(),
            "hours": allocations
                .iter()
                .map(|allocation| allocation.hours.to_string())
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "targets": allocations
                .iter()
                .map(|allocation| allocation.target.to_string())
                .collect::<Vec<_>>(),
            "target_sum": target_sum.to_string()
        }),
        reasoning: format!(
            "Each share floored to a whole unit; targets total ${} of ${}",
            target_sum, input.total_cash
        ),
    });

    let summary = assign_bills(&mut allocations, inventory)?;
    let leftover = input.total_cash - summary.assigned_total;

    audit.steps.push(AuditStep {
        step_number: audit.next_step_number(),
        rule_id: "greedy_assignment".to_string(),
        rule_name: "Largest Bill First".to_string(),
        input: serde_json::json!({
            "inventory": bill_counts_json(inventory.counts())
        }),
        output: serde_json::json!({
            "assigned_total": summary.assigned_total.to_string(),
            "unassigned": bill_counts_json(&summary.unassigned)
        }),
        reasoning: format!(
            "Handed out ${} in whole bills; {} bill(s) fit no remaining need",
            summary.assigned_total,
            summary.unassigned.bill_count()
        ),
    });

    let verdict = evaluate_leftover(leftover, allocations.len(), config.leftover());

    audit.steps.push(AuditStep {
        step_number: audit.next_step_number(),
        rule_id: "leftover_policy".to_string(),
        rule_name: "Leftover Policy".to_string(),
        input: serde_json::json!({
            "leftover": leftover.to_string(),
            "worker_count": allocations.len(),
            "policy": policy_name(config.leftover().policy),
            "flat_allowance": config.leftover().flat_allowance.to_string()
        }),
        output: serde_json::json!({
            "verdict": verdict_name(&verdict)
        }),
        reasoning: match verdict {
            LeftoverVerdict::Settled => "Every bill was handed out".to_string(),
            LeftoverVerdict::Advisory(amount) => {
                format!("${amount} left over is small enough to settle out of band")
            }
            LeftoverVerdict::Rejected(amount) => {
                format!("${amount} left over is too large; smaller bills are needed")
            }
        },
    });

    let advisory = match verdict {
        LeftoverVerdict::Settled => None,
        LeftoverVerdict::Advisory(amount) => {
            let advisory = Advisory::for_leftover(amount);
            audit.warnings.push(AuditWarning {
                code: "LEFTOVER_FLIP".to_string(),
                message: advisory.message.clone(),
            });
            Some(advisory)
        }
        LeftoverVerdict::Rejected(amount) => {
            warn!(
                leftover = %amount,
                total_cash = %input.total_cash,
                worker_count = allocations.len(),
                "Distribution rejected: leftover too large"
            );
            return Err(EngineError::LeftoverTooLarge {
                leftover: amount,
                total_cash: input.total_cash,
                total_hours: input.total_hours,
                hourly_rate,
            });
        }
    };

    info!(
        worker_count = allocations.len(),
        total_paid = %summary.assigned_total,
        leftover = %leftover,
        advisory = advisory.is_some(),
        "Distribution completed"
    );

    Ok(DistributionResult {
        total_cash: input.total_cash,
        total_hours: input.total_hours,
        hourly_rate,
        per_worker: allocations,
        total_paid: summary.assigned_total,
        leftover,
        advisory,
        audit,
    })
}

fn bill_counts_json(counts: &BillCounts) -> serde_json::Value {
    serde_json::Value::Array(
        counts
            .iter()
            .filter(|entry| entry.count > 0)
            .map(|entry| serde_json::json!({ "face_value": entry.face_value, "count": entry.count }))
            .collect(),
    )
}

fn policy_name(policy: LeftoverPolicy) -> &'static str {
    match policy {
        LeftoverPolicy::FlatAllowance => "flat_allowance",
        LeftoverPolicy::GroupSizeAware => "group_size_aware",
    }
}

fn verdict_name(verdict: &LeftoverVerdict) -> &'static str {
    match verdict {
        LeftoverVerdict::Settled => "settled",
        LeftoverVerdict::Advisory(_) => "advisory",
        LeftoverVerdict::Rejected(_) => "rejected",
    }
}
