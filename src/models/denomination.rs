//! Bill denominations and per-denomination counts.
//!
//! Counts are always keyed by the full configured set of face values in
//! descending order, so an inventory and every worker's bills share one
//! shape and iterate largest bill first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The face values the cash drawer can hold, largest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct DenominationSet {
    face_values: Vec<u32>,
}

impl DenominationSet {
    /// Builds a set from face values in any order.
    ///
    /// Returns `InvalidConfig` if the list is empty, contains a zero, or
    /// repeats a face value.
    pub fn new(mut face_values: Vec<u32>) -> EngineResult<Self> {
        if face_values.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "at least one denomination is required".to_string(),
            });
        }
        if face_values.contains(&0) {
            return Err(EngineError::InvalidConfig {
                message: "denominations must be positive".to_string(),
            });
        }
        face_values.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(pair) = face_values.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(EngineError::InvalidConfig {
                message: format!("duplicate denomination: {}", pair[0]),
            });
        }
        Ok(Self { face_values })
    }

    /// Returns the face values, largest first.
    pub fn face_values(&self) -> &[u32] {
        &self.face_values
    }

    /// Returns true if `face_value` belongs to the set.
    pub fn contains(&self, face_value: u32) -> bool {
        self.face_values.contains(&face_value)
    }
}

impl Default for DenominationSet {
    /// US paper bills: 100, 50, 20, 10, 5, 2, 1.
    fn default() -> Self {
        Self {
            face_values: vec![100, 50, 20, 10, 5, 2, 1],
        }
    }
}

impl TryFrom<Vec<u32>> for DenominationSet {
    type Error = EngineError;

    fn try_from(face_values: Vec<u32>) -> EngineResult<Self> {
        Self::new(face_values)
    }
}

impl From<DenominationSet> for Vec<u32> {
    fn from(set: DenominationSet) -> Self {
        set.face_values
    }
}

/// Number of bills held for one face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillCount {
    /// The face value of the bill.
    pub face_value: u32,
    /// How many bills of that value.
    pub count: u32,
}

/// Ordered mapping from face value to count, largest face value first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillCounts {
    counts: Vec<BillCount>,
}

impl BillCounts {
    /// Creates an all-zero mapping over every face value in `set`.
    pub fn zeroed(set: &DenominationSet) -> Self {
        Self {
            counts: set
                .face_values()
                .iter()
                .map(|&face_value| BillCount {
                    face_value,
                    count: 0,
                })
                .collect(),
        }
    }

    /// Returns the count held for `face_value`, or zero if it is not a key.
    pub fn get(&self, face_value: u32) -> u32 {
        self.counts
            .iter()
            .find(|entry| entry.face_value == face_value)
            .map_or(0, |entry| entry.count)
    }

    /// Creates an all-zero mapping over the same face values as `self`.
    pub fn zeroed_like(&self) -> Self {
        Self {
            counts: self
                .counts
                .iter()
                .map(|entry| BillCount {
                    face_value: entry.face_value,
                    count: 0,
                })
                .collect(),
        }
    }

    /// Adds `count` bills of `face_value`.
    ///
    /// Returns `UnknownDenomination` if `face_value` is not a key.
    pub fn add_many(&mut self, face_value: u32, count: u32) -> EngineResult<()> {
        let entry = self
            .counts
            .iter_mut()
            .find(|entry| entry.face_value == face_value)
            .ok_or(EngineError::UnknownDenomination { face_value })?;
        entry.count = entry.count.saturating_add(count);
        Ok(())
    }

    /// Records one more bill of `face_value`.
    pub fn add_one(&mut self, face_value: u32) -> EngineResult<()> {
        self.add_many(face_value, 1)
    }

    /// Iterates over every entry, largest face value first.
    pub fn iter(&self) -> impl Iterator<Item = &BillCount> {
        self.counts.iter()
    }

    /// Total number of bills across all denominations.
    pub fn bill_count(&self) -> u64 {
        self.counts.iter().map(|entry| u64::from(entry.count)).sum()
    }

    /// Cash value of all bills: the sum of face value times count.
    pub fn total(&self) -> Decimal {
        let total: u64 = self
            .counts
            .iter()
            .map(|entry| u64::from(entry.face_value) * u64::from(entry.count))
            .sum();
        Decimal::from(total)
    }
}

/// The bills available for a distribution run.
///
/// # Examples
///
/// ```
/// use gratuity_engine::models::{DenominationInventory, DenominationSet};
/// use rust_decimal::Decimal;
///
/// let set = DenominationSet::default();
/// let inventory = DenominationInventory::from_counts(&set, [(20, 5), (1, 3)]).unwrap();
/// assert_eq!(inventory.total_cash(), Decimal::from(103));
/// assert_eq!(inventory.count_of(50), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationInventory {
    counts: BillCounts,
}

impl DenominationInventory {
    /// Builds an inventory from `(face_value, count)` pairs.
    ///
    /// Face values missing from the pairs hold zero bills; repeated face
    /// values are summed. Returns `UnknownDenomination` for a face value
    /// outside `set`.
    pub fn from_counts<I>(set: &DenominationSet, pairs: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut counts = BillCounts::zeroed(set);
        for (face_value, count) in pairs {
            counts.add_many(face_value, count)?;
        }
        Ok(Self { counts })
    }

    /// Returns the number of bills held for `face_value`.
    pub fn count_of(&self, face_value: u32) -> u32 {
        self.counts.get(face_value)
    }

    /// Returns the underlying counts.
    pub fn counts(&self) -> &BillCounts {
        &self.counts
    }

    /// Cash value of the whole inventory.
    pub fn total_cash(&self) -> Decimal {
        self.counts.total()
    }
}
