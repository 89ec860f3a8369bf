//! Gratuity engine: hours-proportional tip splitting.
//!
//! This crate splits a pool of tips among workers in proportion to the
//! hours they worked, either exactly to the cent or as a feasible handout
//! of whole bills drawn from a fixed denomination inventory.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod session;
