//! Persistence of entered names and hours between sessions.
//!
//! Saving and loading are best-effort: a failing store is logged and
//! otherwise ignored, and never affects a calculation.

mod saved;
mod store;

pub use saved::{Mode, RosterEntry, SavedRoster};
pub use store::{JsonFileRosterStore, MemoryRosterStore, RosterStore};

use tracing::warn;

/// Saves `roster` under `key`, logging and swallowing any failure.
///
/// Returns true if the roster was written.
pub fn save_best_effort(store: &dyn RosterStore, key: &str, roster: &SavedRoster) -> bool {
    match store.save(key, roster) {
        Ok(()) => true,
        Err(err) => {
            warn!(key, error = %err, "Could not save roster");
            false
        }
    }
}

/// Loads the roster under `key`, treating any failure as nothing saved.
pub fn load_best_effort(store: &dyn RosterStore, key: &str) -> Option<SavedRoster> {
    match store.load(key) {
        Ok(roster) => roster,
        Err(err) => {
            warn!(key, error = %err, "Could not load roster");
            None
        }
    }
}
