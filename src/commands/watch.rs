//! Runs the reminder scans on a fixed schedule.
//!
//! Assembles the repository, the alert gateway, and both scan jobs from
//! configuration, then hands them to the scheduler loop. This process is
//! the scheduling collaborator: it decides when jobs run and whether a
//! failed run gets another chance (it always does, on the next round).

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::libs::repository::Repository;
use crate::libs::scan::{ExcursionScan, VacationScan};
use crate::libs::scheduler::Scheduler;
use crate::msg_print;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;

    let repository = Arc::new(Repository::open_default(config.scan.workers)?);
    let notifier = Arc::new(Notifier::console(config.notifications_enabled));
    let wait_limit = Duration::from_secs(config.scan.wait_limit_secs);

    let vacation_scan = VacationScan::new(Arc::clone(&repository), Arc::clone(&notifier)).with_wait_limit(wait_limit);
    let excursion_scan = ExcursionScan::new(repository, notifier).with_wait_limit(wait_limit);

    msg_print!(Message::WatchStarted(config.scan.delay_hours));
    let delay = Duration::from_secs(config.scan.delay_hours * 3600);
    Scheduler::new(vacation_scan, excursion_scan, delay).run().await;
    Ok(())
}
