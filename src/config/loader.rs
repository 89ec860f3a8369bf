//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DenominationSet;

use super::types::{DenominationsFile, EngineConfig, EngineFile};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml         # Leftover policy and roster settings
/// └── denominations.yaml  # Face values held in the drawer
/// ```
///
/// # Example
///
/// ```no_run
/// use gratuity_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Policy: {:?}", loader.config().leftover().policy);
/// # Ok::<(), gratuity_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or holds invalid YAML,
    /// if the denomination list is empty, zero or repeated, or if the flat
    /// allowance is negative.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineFile>(&path.join("engine.yaml"))?;
        let denominations =
            Self::load_yaml::<DenominationsFile>(&path.join("denominations.yaml"))?;

        let set = DenominationSet::new(denominations.denominations)?;
        if engine.leftover.flat_allowance < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "flat_allowance must not be negative, got {}",
                    engine.leftover.flat_allowance
                ),
            });
        }

        let config = EngineConfig::new(set, engine.leftover, engine.roster);
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
