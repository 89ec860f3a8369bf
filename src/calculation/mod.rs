//! Calculation logic for the gratuity engine.
//!
//! This module contains input validation, the exact divider, and the bill
//! distributor with its target computation, greedy bill assignment and
//! leftover policy. Every function here is pure: results depend only on
//! the arguments.

mod distributor;
mod exact_divider;
mod greedy_assignment;
mod leftover_policy;
mod targets;
mod tolerance;
mod validation;

pub use distributor::compute_distribution;
pub use exact_divider::{compute_division, round_to_cents};
pub use greedy_assignment::{AssignmentSummary, assign_bills, select_recipient};
pub use leftover_policy::{LeftoverVerdict, evaluate_leftover};
pub use targets::{build_allocations, integer_target};
pub use tolerance::{
    ALLOWANCE_TOLERANCE, EPSILON, NOISE_THRESHOLD, approx_gte, exceeds, floor_with_epsilon,
    is_negligible,
};
pub use validation::{
    ValidatedInput, parse_amount, validate_distribution_input, validate_division_input,
    validate_rows, validate_workers,
};
