//! Configuration loading and management for the gratuity engine.
//!
//! This module loads the denomination set, the leftover policy and the
//! roster storage settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use gratuity_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Denominations: {:?}", config.config().denominations().face_values());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, LeftoverConfig, LeftoverPolicy, RosterConfig};
