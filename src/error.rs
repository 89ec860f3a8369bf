//! Error types for the gratuity engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a tip split or a bill distribution.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the gratuity engine.
///
/// Validation variants carry the operator-facing message verbatim so the
/// caller can display `error.to_string()` without further formatting.
///
/// # Example
///
/// ```
/// use gratuity_engine::error::EngineError;
///
/// let error = EngineError::NoValidWorkers;
/// assert_eq!(
///     error.to_string(),
///     "Please enter at least one employee with a name and hours."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// No row had both a name and a positive number of hours.
    #[error("Please enter at least one employee with a name and hours.")]
    NoValidWorkers,

    /// The hours of the valid workers did not add up to a positive number.
    #[error("Total hours must be greater than zero.")]
    NonPositiveHours,

    /// The tip total given to the exact divider was missing or not positive.
    #[error("Please enter a valid Total Tips amount.")]
    InvalidTotal,

    /// The denomination inventory held no cash.
    #[error("Please enter at least one bill in the denominations.")]
    NoBills,

    /// Hours or amounts were numeric but too large or too small to split.
    #[error("The entered hours or amounts are too large or too small to calculate.")]
    InputOutOfRange,

    /// The bills could not be handed out without leaving too much unassigned.
    ///
    /// The summary figures are kept so the caller can still show them.
    #[error(
        "The leftover amount is ${shown}. Please break at least ${shown} from larger bills into smaller denominations, update the bill quantities, and try again.",
        shown = cents(.leftover)
    )]
    LeftoverTooLarge {
        /// Cash that no worker could take without exceeding their target.
        leftover: Decimal,
        /// Total cash in the inventory.
        total_cash: Decimal,
        /// Sum of the valid workers' hours.
        total_hours: Decimal,
        /// Cash per hour worked.
        hourly_rate: Decimal,
    },

    /// A bill count was supplied for a face value outside the configured set.
    #[error("Unknown denomination: {face_value}")]
    UnknownDenomination {
        /// The rejected face value.
        face_value: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// Reading or writing the saved roster failed.
    #[error("Roster storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors the operator fixes by correcting the entered
    /// names, hours, total or bill counts.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::NoValidWorkers
                | EngineError::NonPositiveHours
                | EngineError::InvalidTotal
                | EngineError::NoBills
                | EngineError::InputOutOfRange
                | EngineError::UnknownDenomination { .. }
        )
    }
}

/// Rounds to the cent and always shows two decimal places.
fn cents(amount: &Decimal) -> Decimal {
    let mut shown = amount.round_dp(2);
    shown.rescale(2);
    shown
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
