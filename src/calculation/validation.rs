//! Input validation shared by the exact divider and the bill distributor.
//!
//! Rules are checked in order and the first failure wins:
//! 1. at least one worker with a name and positive hours,
//! 2. total hours greater than zero,
//! 3. a positive amount of cash to split.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DenominationInventory, Worker, WorkerRow, parse_decimal};

/// Workers and totals that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    /// Workers with a name and positive hours, in row order.
    pub workers: Vec<Worker>,
    /// Sum of their hours, always positive.
    pub total_hours: Decimal,
    /// Cash to split, always positive.
    pub total_cash: Decimal,
}

impl ValidatedInput {
    /// Cash per hour worked.
    ///
    /// Returns `InputOutOfRange` when the quotient does not fit in a
    /// `Decimal`, as happens with vanishingly small hours.
    pub fn hourly_rate(&self) -> EngineResult<Decimal> {
        self.total_cash
            .checked_div(self.total_hours)
            .ok_or(EngineError::InputOutOfRange)
    }
}

/// Turns raw grid rows into workers, skipping rows without a name or
/// without positive, numeric hours.
///
/// Each worker keeps the position of its row, so skipped rows leave gaps
/// in the indices rather than shifting later workers up.
///
/// # Examples
///
/// ```
/// use gratuity_engine::calculation::validate_rows;
/// use gratuity_engine::models::WorkerRow;
///
/// let rows = vec![
///     WorkerRow::new("Ana", "8"),
///     WorkerRow::new("", ""),
///     WorkerRow::new("Ben", "4.5"),
/// ];
/// let workers = validate_rows(&rows);
/// assert_eq!(workers.len(), 2);
/// assert_eq!(workers[1].index, 2);
/// ```
pub fn validate_rows(rows: &[WorkerRow]) -> Vec<Worker> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| row.to_worker(index))
        .collect()
}

/// Parses an entered money amount, ignoring surrounding whitespace.
///
/// Exponent forms such as `1.2e2` are accepted. Returns `None` for blank
/// or non-numeric text.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    parse_decimal(raw)
}

/// Validates the inputs of the exact divider.
///
/// `total_amount` is `None` when the entered total could not be parsed.
pub fn validate_division_input(
    workers: &[Worker],
    total_amount: Option<Decimal>,
) -> EngineResult<ValidatedInput> {
    let (workers, total_hours) = validate_workers(workers)?;
    let total_cash = total_amount
        .filter(|total| *total > Decimal::ZERO)
        .ok_or(EngineError::InvalidTotal)?;

    Ok(ValidatedInput {
        workers,
        total_hours,
        total_cash,
    })
}

/// Validates the inputs of the bill distributor.
pub fn validate_distribution_input(
    workers: &[Worker],
    inventory: &DenominationInventory,
) -> EngineResult<ValidatedInput> {
    let (workers, total_hours) = validate_workers(workers)?;
    let total_cash = inventory.total_cash();
    if total_cash <= Decimal::ZERO {
        return Err(EngineError::NoBills);
    }

    Ok(ValidatedInput {
        workers,
        total_hours,
        total_cash,
    })
}

/// Applies rules 1 and 2 on their own, before any cash is looked at.
///
/// Workers with a blank name or non-positive hours are dropped. Returns the
/// remaining workers and their total hours, or `InputOutOfRange` when the
/// hours overflow a `Decimal`.
pub fn validate_workers(workers: &[Worker]) -> EngineResult<(Vec<Worker>, Decimal)> {
    let workers: Vec<Worker> = workers
        .iter()
        .filter(|worker| !worker.name.trim().is_empty() && worker.hours > Decimal::ZERO)
        .cloned()
        .collect();

    if workers.is_empty() {
        return Err(EngineError::NoValidWorkers);
    }

    let total_hours = workers
        .iter()
        .try_fold(Decimal::ZERO, |sum, worker| sum.checked_add(worker.hours))
        .ok_or(EngineError::InputOutOfRange)?;
    if total_hours <= Decimal::ZERO {
        return Err(EngineError::NonPositiveHours);
    }

    Ok((workers, total_hours))
}
