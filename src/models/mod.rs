//! Core data models for the gratuity engine.
//!
//! This module contains the domain models shared by the exact divider and
//! the bill distributor.

mod allocation_result;
mod denomination;
mod worker;

pub use allocation_result::{
    Advisory, Allocation, AuditStep, AuditTrace, AuditWarning, DistributionResult,
    DivisionResult, WorkerAmount,
};
pub use denomination::{BillCount, BillCounts, DenominationInventory, DenominationSet};
pub use worker::{Worker, WorkerRow};

pub(crate) use worker::parse_decimal;
