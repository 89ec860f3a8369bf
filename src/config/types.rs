//! Configuration types for the gratuity engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DenominationSet;

/// How much unassigned cash a distribution may leave before it is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftoverPolicy {
    /// Accept only when the leftover is within the flat allowance.
    FlatAllowance,
    /// Accept when the leftover is within the flat allowance, or smaller
    /// than the number of workers sharing it.
    #[default]
    GroupSizeAware,
}

/// Leftover handling, from the `leftover` section of engine.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftoverConfig {
    /// Which acceptance rule applies.
    #[serde(default)]
    pub policy: LeftoverPolicy,
    /// Leftover that is always tolerated, in whole currency units.
    #[serde(default = "default_flat_allowance")]
    pub flat_allowance: Decimal,
}

fn default_flat_allowance() -> Decimal {
    Decimal::from(4)
}

impl Default for LeftoverConfig {
    fn default() -> Self {
        Self {
            policy: LeftoverPolicy::default(),
            flat_allowance: default_flat_allowance(),
        }
    }
}

/// Where saved rosters live, from the `roster` section of engine.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Prefix of the storage key; the mode name is appended.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

fn default_key_prefix() -> String {
    "gratuity_roster".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
        }
    }
}

/// engine.yaml file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineFile {
    /// Leftover handling.
    #[serde(default)]
    pub leftover: LeftoverConfig,
    /// Roster persistence.
    #[serde(default)]
    pub roster: RosterConfig,
}

/// denominations.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DenominationsFile {
    /// Face values the drawer can hold, in any order.
    pub denominations: Vec<u32>,
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use gratuity_engine::config::{EngineConfig, LeftoverPolicy};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.leftover().policy, LeftoverPolicy::GroupSizeAware);
/// assert_eq!(config.denominations().face_values(), &[100, 50, 20, 10, 5, 2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    denominations: DenominationSet,
    leftover: LeftoverConfig,
    roster: RosterConfig,
}

impl EngineConfig {
    /// Creates an EngineConfig from its component parts.
    pub fn new(
        denominations: DenominationSet,
        leftover: LeftoverConfig,
        roster: RosterConfig,
    ) -> Self {
        Self {
            denominations,
            leftover,
            roster,
        }
    }

    /// Returns the configured denominations, largest first.
    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Returns the leftover handling.
    pub fn leftover(&self) -> &LeftoverConfig {
        &self.leftover
    }

    /// Returns the roster persistence settings.
    pub fn roster(&self) -> &RosterConfig {
        &self.roster
    }

    /// Returns a copy using `policy` instead of the configured one.
    pub fn with_leftover_policy(mut self, policy: LeftoverPolicy) -> Self {
        self.leftover.policy = policy;
        self
    }
}
