//! Key-value stores for saved rosters.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{EngineError, EngineResult};

use super::saved::SavedRoster;

/// A durable place to keep one roster per key.
pub trait RosterStore {
    /// Returns the roster saved under `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> EngineResult<Option<SavedRoster>>;

    /// Saves `roster` under `key`, replacing any previous one.
    fn save(&self, key: &str, roster: &SavedRoster) -> EngineResult<()>;
}

/// Stores each roster as `<key>.json` in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileRosterStore {
    dir: PathBuf,
}

impl JsonFileRosterStore {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl RosterStore for JsonFileRosterStore {
    fn load(&self, key: &str) -> EngineResult<Option<SavedRoster>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| EngineError::Storage {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        let roster = serde_json::from_str(&content).map_err(|e| EngineError::Storage {
            message: format!("failed to parse {}: {}", path.display(), e),
        })?;
        Ok(Some(roster))
    }

    fn save(&self, key: &str, roster: &SavedRoster) -> EngineResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| EngineError::Storage {
            message: format!("failed to create {}: {}", self.dir.display(), e),
        })?;

        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(roster).map_err(|e| EngineError::Storage {
            message: e.to_string(),
        })?;
        fs::write(&path, content).map_err(|e| EngineError::Storage {
            message: format!("failed to write {}: {}", path.display(), e),
        })
    }
}

/// Keeps rosters in memory as serialized JSON, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryRosterStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryRosterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw text under `key`, bypassing serialization.
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) -> EngineResult<()> {
        self.lock()?.insert(key.into(), raw.into());
        Ok(())
    }

    fn lock(&self) -> EngineResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|_| EngineError::Storage {
            message: "roster store lock poisoned".to_string(),
        })
    }
}

impl RosterStore for MemoryRosterStore {
    fn load(&self, key: &str) -> EngineResult<Option<SavedRoster>> {
        let entries = self.lock()?;
        entries
            .get(key)
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| EngineError::Storage {
                    message: format!("failed to parse roster '{key}': {e}"),
                })
            })
            .transpose()
    }

    fn save(&self, key: &str, roster: &SavedRoster) -> EngineResult<()> {
        let raw = serde_json::to_string(roster).map_err(|e| EngineError::Storage {
            message: e.to_string(),
        })?;
        self.lock()?.insert(key.to_string(), raw);
        Ok(())
    }
}
