//! Exact divider: splits a tip total by hours, to the cent.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, DivisionResult, Worker, WorkerAmount};

use super::validation::validate_division_input;

/// Rounds a share to the nearest cent, halves away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Splits `total_amount` across `workers` in proportion to their hours.
///
/// Each share is `rate × hours` rounded to the cent independently, where
/// `rate = total_amount / total_hours`. The rounded shares are not
/// reconciled against the total, so `total_paid` can differ from
/// `total_amount` by up to half a cent per worker.
///
/// # Errors
///
/// `NoValidWorkers`, `NonPositiveHours` or `InvalidTotal`, checked in that
/// order.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::compute_division;
/// use gratuity_engine::models::Worker;
/// use rust_decimal::Decimal;
///
/// let workers = vec![
///     Worker::new(0, "Ana", Decimal::from(6)),
///     Worker::new(1, "Ben", Decimal::from(2)),
/// ];
/// let result = compute_division(&workers, Some(Decimal::from(100))).unwrap();
/// assert_eq!(result.amount_for(0), Some(Decimal::from(75)));
/// assert_eq!(result.amount_for(1), Some(Decimal::from(25)));
/// ```
pub fn compute_division(
    workers: &[Worker],
    total_amount: Option<Decimal>,
) -> EngineResult<DivisionResult> {
    let input = validate_division_input(workers, total_amount)?;
    let hourly_rate = input.hourly_rate()?;
    debug!(
        total_cash = %input.total_cash,
        total_hours = %input.total_hours,
        hourly_rate = %hourly_rate,
        "Computed hourly rate"
    );

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
            round_to_cents(hourly_rate)
        ),
    });

    let per_worker = input
        .workers
        .into_iter()
        .map(|worker| {
            let share = hourly_rate
                .checked_mul(worker.hours)
                .ok_or(EngineError::InputOutOfRange)?;
            Ok(WorkerAmount {
                amount: round_to_cents(share),
                index: worker.index,
                name: worker.name,
                hours: worker.hours,
            })
        })
        .collect::<EngineResult<Vec<WorkerAmount>>>()?;
    let total_paid = per_worker
        .iter()
        .try_fold(Decimal::ZERO, |sum, entry| sum.checked_add(entry.amount))
        .ok_or(EngineError::InputOutOfRange)?;
    let discrepancy = total_paid - input.total_cash;

    audit.steps.push(AuditStep {
        step_number: audit.next_step_number(),
        rule_id: "cent_rounding".to_string(),
        rule_name: "Cent Rounding".to_string(),
        input: serde_json::json!({
            "worker_count": per_worker.len()
        }),
        output: serde_json::json!({
            "total_paid": total_paid.to_string(),
            "discrepancy": discrepancy.to_string()
        }),
        reasoning: format!(
            "Each share rounded to the cent independently; paid ${} of ${}",
            total_paid, input.total_cash
        ),
    });
    if !discrepancy.is_zero() {
        audit.warnings.push(AuditWarning {
            code: "ROUNDING_DISCREPANCY".to_string(),
            message: format!(
                "Rounded shares total ${} against ${} entered",
                total_paid, input.total_cash
            ),
        });
    }

    info!(
        worker_count = per_worker.len(),
        total_paid = %total_paid,
        "Division completed"
    );

    Ok(DivisionResult {
        total_cash: input.total_cash,
        total_hours: input.total_hours,
        hourly_rate,
        per_worker,
        total_paid,
        audit,
    })
}
