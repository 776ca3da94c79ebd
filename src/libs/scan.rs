//! Background scan jobs for vacation and excursion reminders.
//!
//! Each job captures "today" once, fetches the full record list through the
//! repository, and waits a bounded time for the reply before alerting on
//! date matches. A run that cannot get its result in time reports
//! [`ScanOutcome::Failed`] without emitting further alerts; a run with zero
//! matches is a normal success.

use crate::libs::notifier::Notifier;
use crate::libs::repository::Repository;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use std::time::Duration;

pub const VACATION_START: &str = "Your vacation is starting today!";
pub const VACATION_END: &str = "Your vacation is ending today!";
pub const EXCURSION_TODAY: &str = "Your excursion is today!";

/// How long a scan waits for the repository reply before giving up.
pub const DEFAULT_WAIT_LIMIT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Succeeded,
    Failed,
}

/// Alerts for vacations starting or ending today.
pub struct VacationScan {
    repository: Arc<Repository>,
    notifier: Arc<Notifier>,
    wait_limit: Duration,
}

impl VacationScan {
    pub fn new(repository: Arc<Repository>, notifier: Arc<Notifier>) -> Self {
        VacationScan {
            repository,
            notifier,
            wait_limit: DEFAULT_WAIT_LIMIT,
        }
    }

    pub fn with_wait_limit(mut self, wait_limit: Duration) -> Self {
        self.wait_limit = wait_limit;
        self
    }

    pub fn run(&self) -> ScanOutcome {
        self.run_for(Local::now().date_naive())
    }

    pub fn run_for(&self, today: NaiveDate) -> ScanOutcome {
        tracing::debug!(%today, "vacation scan running");
        let vacations = match self.repository.all_vacations().wait_timeout(self.wait_limit) {
            Ok(vacations) => vacations,
            Err(e) => {
                tracing::warn!(error = %e, "vacation scan could not fetch vacations");
                return ScanOutcome::Failed;
            }
        };
        for vacation in &vacations {
            // A single-day vacation alerts once, for the start branch only.
            if vacation.start_date == Some(today) {
                tracing::debug!(title = %vacation.title, "vacation starting today");
                self.notifier.vacation_alert(&vacation.title, VACATION_START);
            } else if vacation.end_date == Some(today) {
                tracing::debug!(title = %vacation.title, "vacation ending today");
                self.notifier.vacation_alert(&vacation.title, VACATION_END);
            }
        }
        ScanOutcome::Succeeded
    }
}

/// Alerts for excursions falling on today.
pub struct ExcursionScan {
    repository: Arc<Repository>,
    notifier: Arc<Notifier>,
    wait_limit: Duration,
}

impl ExcursionScan {
    pub fn new(repository: Arc<Repository>, notifier: Arc<Notifier>) -> Self {
        ExcursionScan {
            repository,
            notifier,
            wait_limit: DEFAULT_WAIT_LIMIT,
        }
    }

    pub fn with_wait_limit(mut self, wait_limit: Duration) -> Self {
        self.wait_limit = wait_limit;
        self
    }

    pub fn run(&self) -> ScanOutcome {
        self.run_for(Local::now().date_naive())
    }

    pub fn run_for(&self, today: NaiveDate) -> ScanOutcome {
        tracing::debug!(%today, "excursion scan running");
        let excursions = match self.repository.all_excursions().wait_timeout(self.wait_limit) {
            Ok(excursions) => excursions,
            Err(e) => {
                tracing::warn!(error = %e, "excursion scan could not fetch excursions");
                return ScanOutcome::Failed;
            }
        };
        for excursion in &excursions {
            if excursion.date == Some(today) {
                tracing::debug!(title = %excursion.title, "excursion today");
                self.notifier.excursion_alert(&excursion.title, EXCURSION_TODAY);
            }
        }
        ScanOutcome::Succeeded
    }
}
