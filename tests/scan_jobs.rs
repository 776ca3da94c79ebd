#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vplan::libs::excursion::Excursion;
    use vplan::libs::notifier::{AlertSink, AlertSlot, Notifier};
    use vplan::libs::repository::Repository;
    use vplan::libs::scan::{ExcursionScan, ScanOutcome, VacationScan, EXCURSION_TODAY, VACATION_END, VACATION_START};
    use vplan::libs::vacation::Vacation;

    /// Captures every posted alert instead of rendering it.
    #[derive(Default)]
    struct RecordingSink {
        alerts: Mutex<Vec<(AlertSlot, String, String)>>,
    }

    impl RecordingSink {
        fn alerts(&self) -> Vec<(AlertSlot, String, String)> {
            self.alerts.lock().unwrap().clone()
        }
    }

    impl AlertSink for RecordingSink {
        fn post(&self, slot: AlertSlot, title: &str, message: &str) {
            self.alerts.lock().unwrap().push((slot, title.to_string(), message.to_string()));
        }
    }

    struct ScanTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ScanTestContext {
        fn setup() -> Self {
            ScanTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ScanTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("vplan.db")
        }

        fn repository(&self) -> Arc<Repository> {
            Arc::new(Repository::open(self.db_path(), 4).unwrap())
        }

        fn recording_notifier(&self) -> (Arc<Notifier>, Arc<RecordingSink>) {
            let sink = Arc::new(RecordingSink::default());
            let notifier = Arc::new(Notifier::new(true, Arc::clone(&sink) as Arc<dyn AlertSink>));
            (notifier, sink)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_vacation_scan_alerts_on_start_date(ctx: &mut ScanTestContext) {
        let repository = ctx.repository();
        let (notifier, sink) = ctx.recording_notifier();
        repository
            .add_vacation(Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10)))
            .wait()
            .unwrap();

        let scan = VacationScan::new(repository, notifier);
        assert_eq!(scan.run_for(date(2024, 6, 1)), ScanOutcome::Succeeded);

        let alerts = sink.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0], (AlertSlot::Vacation, "Lisbon".to_string(), VACATION_START.to_string()));
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_vacation_scan_alerts_on_end_date(ctx: &mut ScanTestContext) {
        let repository = ctx.repository();
        let (notifier, sink) = ctx.recording_notifier();
        repository
            .add_vacation(Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10)))
            .wait()
            .unwrap();

        let scan = VacationScan::new(repository, notifier);
        assert_eq!(scan.run_for(date(2024, 6, 10)), ScanOutcome::Succeeded);

        let alerts = sink.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].2, VACATION_END);
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_single_day_vacation_alerts_once(ctx: &mut ScanTestContext) {
        let repository = ctx.repository();
        let (notifier, sink) = ctx.recording_notifier();
        repository
            .add_vacation(Vacation::new("Day trip", "Cabin", date(2024, 6, 1), date(2024, 6, 1)))
            .wait()
            .unwrap();

        let scan = VacationScan::new(repository, notifier);
        assert_eq!(scan.run_for(date(2024, 6, 1)), ScanOutcome::Succeeded);

        // Start and end coincide; only the start branch fires.
        let alerts = sink.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].2, VACATION_START);
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_vacation_scan_off_date_alerts_nothing(ctx: &mut ScanTestContext) {
        let repository = ctx.repository();
        let (notifier, sink) = ctx.recording_notifier();
        repository
            .add_vacation(Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10)))
            .wait()
            .unwrap();

        let scan = VacationScan::new(repository, notifier);
        assert_eq!(scan.run_for(date(2024, 6, 5)), ScanOutcome::Succeeded);
        assert!(sink.alerts().is_empty());
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_excursion_scan_alerts_on_its_date(ctx: &mut ScanTestContext) {
        let repository = ctx.repository();
        let (notifier, sink) = ctx.recording_notifier();
        let vacation_id = repository
            .add_vacation(Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10)))
            .wait()
            .unwrap();
        repository
            .add_excursion(Excursion::new("Tram tour", vacation_id, date(2024, 6, 5)))
            .wait()
            .unwrap();

        let scan = ExcursionScan::new(Arc::clone(&repository), notifier);
        assert_eq!(scan.run_for(date(2024, 6, 5)), ScanOutcome::Succeeded);

        let alerts = sink.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0], (AlertSlot::Excursion, "Tram tour".to_string(), EXCURSION_TODAY.to_string()));

        // Any other date stays quiet.
        assert_eq!(scan.run_for(date(2024, 6, 6)), ScanOutcome::Succeeded);
        assert_eq!(sink.alerts().len(), 1);
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_disabled_notifier_suppresses_alerts(ctx: &mut ScanTestContext) {
        let repository = ctx.repository();
        let (notifier, sink) = ctx.recording_notifier();
        notifier.set_enabled(false);
        repository
            .add_vacation(Vacation::new("Lisbon", "Hotel Avenida", date(2024, 6, 1), date(2024, 6, 10)))
            .wait()
            .unwrap();

        let scan = VacationScan::new(repository, Arc::clone(&notifier));
        assert_eq!(scan.run_for(date(2024, 6, 1)), ScanOutcome::Succeeded);
        assert!(sink.alerts().is_empty());

        // Re-enabling resumes alerts on the next run.
        notifier.set_enabled(true);
        assert_eq!(scan.run_for(date(2024, 6, 1)), ScanOutcome::Succeeded);
        assert_eq!(sink.alerts().len(), 1);
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_scan_of_empty_store_succeeds(ctx: &mut ScanTestContext) {
        let repository = ctx.repository();
        let (notifier, sink) = ctx.recording_notifier();

        let vacation_scan = VacationScan::new(Arc::clone(&repository), Arc::clone(&notifier));
        let excursion_scan = ExcursionScan::new(repository, notifier);
        assert_eq!(vacation_scan.run_for(date(2024, 6, 1)), ScanOutcome::Succeeded);
        assert_eq!(excursion_scan.run_for(date(2024, 6, 1)), ScanOutcome::Succeeded);
        assert!(sink.alerts().is_empty());
    }

    #[test_context(ScanTestContext)]
    #[test]
    fn test_scan_fails_when_reply_never_arrives(ctx: &mut ScanTestContext) {
        // A pool without workers never answers; the bounded wait converts
        // that into a failed run with no alerts.
        let repository = Arc::new(Repository::open(ctx.db_path(), 0).unwrap());
        let (notifier, sink) = ctx.recording_notifier();

        let scan = VacationScan::new(repository, notifier).with_wait_limit(Duration::from_millis(100));
        assert_eq!(scan.run_for(date(2024, 6, 1)), ScanOutcome::Failed);
        assert!(sink.alerts().is_empty());
    }
}
