//! Worker model and the raw grid rows it is validated from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An unvalidated row as typed by the operator.
///
/// Hours are kept as text so blank or malformed entries survive until
/// validation decides to skip them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRow {
    /// The name as entered, possibly padded with whitespace.
    pub name: String,
    /// The hours as entered, possibly blank or non-numeric.
    pub hours: String,
}

impl WorkerRow {
    /// Creates a row from a name and an hours string.
    pub fn new(name: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hours: hours.into(),
        }
    }

    /// Returns true if neither the name nor the hours hold anything.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.hours.trim().is_empty()
    }

    /// Converts the row into a [`Worker`] at position `index`.
    ///
    /// Returns `None` when the trimmed name is empty or the hours are
    /// missing, unparseable, zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use gratuity_engine::models::WorkerRow;
    ///
    /// assert!(WorkerRow::new("  Ana ", "6.5").to_worker(0).is_some());
    /// assert!(WorkerRow::new("Ana", "0").to_worker(0).is_none());
    /// assert!(WorkerRow::new("", "8").to_worker(0).is_none());
    /// assert!(WorkerRow::new("Ana", "eight").to_worker(0).is_none());
    /// ```
    pub fn to_worker(&self, index: usize) -> Option<Worker> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let hours = parse_decimal(&self.hours)?;
        if hours <= Decimal::ZERO {
            return None;
        }
        Some(Worker {
            index,
            name: name.to_string(),
            hours,
        })
    }
}

/// Parses operator-entered numeric text, ignoring surrounding whitespace.
///
/// Plain decimals and exponent forms such as `1e1` or `2.5E-1` are
/// accepted. An exponent larger than the 28-digit precision never fits and
/// counts as non-numeric.
pub(crate) fn parse_decimal(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    if let Ok(value) = Decimal::from_str(text) {
        return Some(value);
    }

    let (_, exponent) = text.split_once(['e', 'E'])?;
    let magnitude: u32 = exponent.trim_start_matches(['+', '-']).parse().ok()?;
    if magnitude > 28 {
        return None;
    }
    Decimal::from_scientific(text).ok()
}

/// A worker that takes part in a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Position of the originating row; stable across runs.
    pub index: usize,
    /// Trimmed, non-empty name.
    pub name: String,
    /// Hours worked, always positive.
    pub hours: Decimal,
}

impl Worker {
    /// Creates a worker directly from already-validated parts.
    pub fn new(index: usize, name: impl Into<String>, hours: Decimal) -> Self {
        Self {
            index,
            name: name.into(),
            hours,
        }
    }
}
