//! The saved form of an operator's grid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::WorkerRow;

/// Which calculator a roster belongs to. Each mode keeps its own roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The exact divider.
    Divide,
    /// The bill distributor.
    Disperse,
}

impl Mode {
    /// Returns the storage key for this mode under `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gratuity_engine::roster::Mode;
    ///
    /// assert_eq!(Mode::Disperse.storage_key("gratuity_roster"), "gratuity_roster_disperse");
    /// ```
    pub fn storage_key(self, prefix: &str) -> String {
        let suffix = match self {
            Mode::Divide => "divide",
            Mode::Disperse => "disperse",
        };
        format!("{prefix}_{suffix}")
    }
}

/// One saved row. Hours stay as text, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Trimmed name, possibly empty.
    #[serde(default)]
    pub name: String,
    /// Hours text, possibly empty.
    #[serde(default)]
    pub hours: String,
}

/// Names and hours kept between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRoster {
    /// Rows that held a name or hours, in grid order.
    pub entries: Vec<RosterEntry>,
    /// Number of rows the grid had, blank ones included.
    pub worker_count: usize,
    /// When the roster was written.
    pub saved_at: DateTime<Utc>,
}

impl SavedRoster {
    /// Captures `rows`, dropping rows with neither a name nor hours.
    pub fn from_rows(rows: &[WorkerRow], saved_at: DateTime<Utc>) -> Self {
        let entries = rows
            .iter()
            .filter(|row| !row.is_blank())
            .map(|row| RosterEntry {
                name: row.name.trim().to_string(),
                hours: row.hours.trim().to_string(),
            })
            .collect();

        Self {
            entries,
            worker_count: rows.len(),
            saved_at,
        }
    }

    /// Rebuilds the grid.
    ///
    /// The grid has `worker_count` rows, or one per entry when the count
    /// is zero. Entries beyond that size are dropped and missing rows are
    /// blank.
    pub fn to_rows(&self) -> Vec<WorkerRow> {
        let size = if self.worker_count > 0 {
            self.worker_count
        } else {
            self.entries.len()
        };

        let mut rows: Vec<WorkerRow> = self
            .entries
            .iter()
            .take(size)
            .map(|entry| WorkerRow::new(entry.name.clone(), entry.hours.clone()))
            .collect();
        rows.resize(size, WorkerRow::default());
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 22, 30, 0).unwrap()
    }

    #[test]
    fn test_from_rows_drops_blank_rows_but_counts_them() {
        let rows = vec![
            WorkerRow::new(" Ana ", "8"),
            WorkerRow::default(),
            WorkerRow::new("", "3"),
        ];
        let roster = SavedRoster::from_rows(&rows, saved_at());

        assert_eq!(roster.worker_count, 3);
        assert_eq!(
            roster.entries,
            vec![
                RosterEntry {
                    name: "Ana".to_string(),
                    hours: "8".to_string()
                },
                RosterEntry {
                    name: String::new(),
                    hours: "3".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_to_rows_pads_to_worker_count() {
        let roster = SavedRoster {
            entries: vec![RosterEntry {
                name: "Ana".to_string(),
                hours: "8".to_string(),
            }],
            worker_count: 3,
            saved_at: saved_at(),
        };
        let rows = roster.to_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], WorkerRow::new("Ana", "8"));
        assert!(rows[1].is_blank() && rows[2].is_blank());
    }

    #[test]
    fn test_to_rows_falls_back_to_entry_count() {
        let roster = SavedRoster {
            entries: vec![
                RosterEntry {
                    name: "Ana".to_string(),
                    hours: "8".to_string(),
                },
                RosterEntry {
                    name: "Ben".to_string(),
                    hours: "4".to_string(),
                },
            ],
            worker_count: 0,
            saved_at: saved_at(),
        };
        assert_eq!(roster.to_rows().len(), 2);
    }

    #[test]
    fn test_to_rows_truncates_extra_entries() {
        let roster = SavedRoster {
            entries: vec![
                RosterEntry {
                    name: "Ana".to_string(),
                    hours: "8".to_string(),
                },
                RosterEntry {
                    name: "Ben".to_string(),
                    hours: "4".to_string(),
                },
            ],
            worker_count: 1,
            saved_at: saved_at(),
        };
        assert_eq!(roster.to_rows(), vec![WorkerRow::new("Ana", "8")]);
    }

    #[test]
    fn test_storage_keys_differ_per_mode() {
        assert_eq!(Mode::Divide.storage_key("tips"), "tips_divide");
        assert_ne!(
            Mode::Divide.storage_key("tips"),
            Mode::Disperse.storage_key("tips")
        );
    }
}
