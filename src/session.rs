//! A calculator session, as driven by a form-based front end.
//!
//! The session turns raw grid rows into validated workers, runs one of the
//! two calculators, remembers the latest outcome for display, and saves the
//! grid so it can be restored next time. It holds no state that the
//! calculators themselves read.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{
    compute_distribution, compute_division, parse_amount, validate_rows, validate_workers,
};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{DenominationInventory, DistributionResult, DivisionResult, WorkerRow};
use crate::roster::{Mode, RosterStore, SavedRoster, load_best_effort, save_best_effort};

/// Owns the configuration, the roster store and the last shown results.
///
/// Calculation methods take `&mut self`, so a session can never run two
/// calculations at once.
///
/// # Example
///
/// ```
/// use gratuity_engine::config::EngineConfig;
/// use gratuity_engine::models::WorkerRow;
/// use gratuity_engine::roster::{MemoryRosterStore, Mode};
/// use gratuity_engine::session::Session;
/// use rust_decimal::Decimal;
///
/// let mut session = Session::new(EngineConfig::default(), Box::new(MemoryRosterStore::new()));
/// let rows = vec![WorkerRow::new("Ana", "6"), WorkerRow::new("Ben", "2")];
///
/// let result = session.divide(&rows, "100").unwrap();
/// assert_eq!(result.amount_for(0), Some(Decimal::from(75)));
/// assert_eq!(session.restore_rows(Mode::Divide), rows);
/// ```
pub struct Session {
    config: EngineConfig,
    store: Box<dyn RosterStore>,
    last_division: Option<DivisionResult>,
    last_distribution: Option<DistributionResult>,
}

impl Session {
    /// Creates a session with nothing calculated yet.
    pub fn new(config: EngineConfig, store: Box<dyn RosterStore>) -> Self {
        Self {
            config,
            store,
            last_division: None,
            last_distribution: None,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Splits the entered tip total across the grid rows, to the cent.
    ///
    /// The previous division is cleared first and only replaced on
    /// success. On success the grid is saved, best-effort.
    pub fn divide(&mut self, rows: &[WorkerRow], total_tips: &str) -> EngineResult<&DivisionResult> {
        self.last_division = None;

        let workers = validate_rows(rows);
        let result = compute_division(&workers, parse_amount(total_tips))?;

        self.persist(Mode::Divide, rows);
        Ok(&*self.last_division.insert(result))
    }

    /// Distributes the drawer's bills across the grid rows.
    ///
    /// `bill_counts` pairs a face value with the number of bills held. The
    /// worker rules are checked before the bill counts are read. The
    /// previous distribution is cleared first and only replaced on
    /// success, so a refused run leaves nothing stale behind. On success
    /// the grid is saved, best-effort.
    pub fn distribute(
        &mut self,
        rows: &[WorkerRow],
        bill_counts: &[(u32, u32)],
    ) -> EngineResult<&DistributionResult> {
        self.last_distribution = None;

        let workers = validate_rows(rows);
        validate_workers(&workers)?;
        let inventory = DenominationInventory::from_counts(
            self.config.denominations(),
            bill_counts.iter().copied(),
        )?;
        let result = compute_distribution(&workers, &inventory, &self.config)?;

        self.persist(Mode::Disperse, rows);
        Ok(&*self.last_distribution.insert(result))
    }

    /// Returns the latest successful division, if the last attempt succeeded.
    pub fn last_division(&self) -> Option<&DivisionResult> {
        self.last_division.as_ref()
    }

    /// Returns the latest successful distribution, if the last attempt succeeded.
    pub fn last_distribution(&self) -> Option<&DistributionResult> {
        self.last_distribution.as_ref()
    }

    /// Rebuilds the grid saved for `mode`, or an empty grid if none was
    /// saved or it could not be read.
    pub fn restore_rows(&self, mode: Mode) -> Vec<WorkerRow> {
        let key = mode.storage_key(&self.config.roster().key_prefix);
        load_best_effort(self.store.as_ref(), &key)
            .map(|roster| roster.to_rows())
            .unwrap_or_default()
    }

    /// Hourly rate of the last successful run in `mode`, rounded for display.
    pub fn display_rate(&self, mode: Mode) -> Option<Decimal> {
        let rate = match mode {
            Mode::Divide => self.last_division.as_ref()?.hourly_rate,
            Mode::Disperse => self.last_distribution.as_ref()?.hourly_rate,
        };
        Some(rate.round_dp(2))
    }

    fn persist(&self, mode: Mode, rows: &[WorkerRow]) {
        let key = mode.storage_key(&self.config.roster().key_prefix);
        let roster = SavedRoster::from_rows(rows, Utc::now());
        if save_best_effort(self.store.as_ref(), &key, &roster) {
            info!(key = %key, rows = rows.len(), "Saved roster");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::roster::MemoryRosterStore;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn session() -> Session {
        Session::new(EngineConfig::default(), Box::new(MemoryRosterStore::new()))
    }

    struct BrokenStore;

    impl RosterStore for BrokenStore {
        fn load(&self, _key: &str) -> EngineResult<Option<SavedRoster>> {
            Err(EngineError::Storage {
                message: "unavailable".to_string(),
            })
        }

        fn save(&self, _key: &str, _roster: &SavedRoster) -> EngineResult<()> {
            Err(EngineError::Storage {
                message: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_failed_division_clears_previous_result() {
        let mut session = session();
        let rows = vec![WorkerRow::new("Ana", "8")];
        session.divide(&rows, "40").unwrap();
        assert!(session.last_division().is_some());

        let err = session.divide(&[WorkerRow::default()], "40").unwrap_err();
        assert_eq!(err, EngineError::NoValidWorkers);
        assert!(session.last_division().is_none());
    }

    #[test]
    fn test_rejected_distribution_clears_previous_result() {
        let mut session = session();
        let rows = vec![WorkerRow::new("A", "10"), WorkerRow::new("B", "30")];
        session.distribute(&rows, &[(20, 4), (5, 4)]).unwrap();
        assert!(session.last_distribution().is_some());

        let err = session.distribute(&rows, &[(20, 5)]).unwrap_err();
        assert!(matches!(err, EngineError::LeftoverTooLarge { .. }));
        assert!(session.last_distribution().is_none());
    }

    #[test]
    fn test_failed_run_does_not_save_roster() {
        let mut session = session();
        session.divide(&[WorkerRow::new("Ana", "8")], "abc").unwrap_err();
        assert!(session.restore_rows(Mode::Divide).is_empty());
    }

    #[test]
    fn test_modes_keep_separate_rosters() {
        let mut session = session();
        let divide_rows = vec![WorkerRow::new("Ana", "8"), WorkerRow::default()];
        let disperse_rows = vec![WorkerRow::new("Ben", "5")];

        session.divide(&divide_rows, "80").unwrap();
        session.distribute(&disperse_rows, &[(5, 1)]).unwrap();

        assert_eq!(session.restore_rows(Mode::Divide), divide_rows);
        assert_eq!(session.restore_rows(Mode::Disperse), disperse_rows);
    }

    #[test]
    fn test_storage_failure_never_fails_calculation() {
        let mut session = Session::new(EngineConfig::default(), Box::new(BrokenStore));
        let result = session
            .distribute(&[WorkerRow::new("Ana", "5")], &[(5, 1), (1, 2)])
            .unwrap();
        assert_eq!(result.total_paid, dec("7"));
        assert!(session.restore_rows(Mode::Disperse).is_empty());
    }

    #[test]
    fn test_unknown_denomination_is_reported() {
        let mut session = session();
        let err = session
            .distribute(&[WorkerRow::new("Ana", "5")], &[(3, 1)])
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownDenomination { face_value: 3 });
    }

    #[test]
    fn test_blank_grid_reported_before_unknown_denomination() {
        let mut session = session();
        let err = session
            .distribute(&[WorkerRow::default(), WorkerRow::default()], &[(3, 1)])
            .unwrap_err();
        assert_eq!(err, EngineError::NoValidWorkers);
    }

    #[test]
    fn test_out_of_range_hours_surface_as_input_errors() {
        let mut session = session();
        let err = session
            .divide(&[WorkerRow::new("Ana", "0.0000000000000000000000000001")], "1000")
            .unwrap_err();
        assert_eq!(err, EngineError::InputOutOfRange);

        let near_max = "70000000000000000000000000000";
        let err = session
            .distribute(
                &[WorkerRow::new("A", near_max), WorkerRow::new("B", near_max)],
                &[(20, 1)],
            )
            .unwrap_err();
        assert_eq!(err, EngineError::InputOutOfRange);
        assert!(session.last_division().is_none());
        assert!(session.last_distribution().is_none());
    }

    #[test]
    fn test_display_rate_rounds_to_cents() {
        let mut session = session();
        session
            .divide(&[WorkerRow::new("Ana", "3")], "100")
            .unwrap();
        assert_eq!(session.display_rate(Mode::Divide), Some(dec("33.33")));
        assert_eq!(session.display_rate(Mode::Disperse), None);
    }
}
