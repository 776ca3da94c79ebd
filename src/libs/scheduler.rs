//! Fixed-delay scheduling loop for the scan jobs.
//!
//! Plays the role of the external scheduling collaborator: it runs the
//! vacation scan and the excursion scan, reports each outcome, then
//! re-enqueues both after a fixed delay taken from configuration. Retry
//! policy lives here and nowhere else; the jobs themselves never retry.

use crate::libs::messages::Message;
use crate::libs::scan::{ExcursionScan, ScanOutcome, VacationScan};
use crate::{msg_debug, msg_print, msg_warning};
use chrono::Local;
use std::time::Duration;
use tokio::time;

pub struct Scheduler {
    vacation_scan: VacationScan,
    excursion_scan: ExcursionScan,
    delay: Duration,
}

impl Scheduler {
    pub fn new(vacation_scan: VacationScan, excursion_scan: ExcursionScan, delay: Duration) -> Self {
        Scheduler {
            vacation_scan,
            excursion_scan,
            delay,
        }
    }

    /// Runs both jobs, then sleeps the fixed delay, forever.
    pub async fn run(&self) {
        loop {
            self.run_once();
            let next = Local::now() + self.delay;
            msg_print!(Message::WatchNextRun(next.format("%Y-%m-%d %H:%M").to_string()));
            time::sleep(self.delay).await;
        }
    }

    /// One scheduling round: vacation scan, then excursion scan.
    pub fn run_once(&self) {
        msg_debug!(Message::ScanStarted("Vacation".to_string()));
        Self::report("Vacation", self.vacation_scan.run());
        msg_debug!(Message::ScanStarted("Excursion".to_string()));
        Self::report("Excursion", self.excursion_scan.run());
    }

    fn report(name: &str, outcome: ScanOutcome) {
        match outcome {
            ScanOutcome::Succeeded => msg_debug!(Message::ScanSucceeded(name.to_string())),
            ScanOutcome::Failed => msg_warning!(Message::ScanFailed(name.to_string())),
        }
    }
}
