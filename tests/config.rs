#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vplan::libs::config::Config;

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.notifications_enabled);
        assert_eq!(config.scan.delay_hours, 24);
        assert_eq!(config.scan.wait_limit_secs, 30);
        assert_eq!(config.scan.workers, 4);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        // No file yet: defaults.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());

        let mut config = Config::default();
        config.notifications_enabled = false;
        config.scan.delay_hours = 12;
        config.save().unwrap();

        let reloaded = Config::read().unwrap();
        assert!(!reloaded.notifications_enabled);
        assert_eq!(reloaded.scan.delay_hours, 12);
        assert_eq!(reloaded.scan.workers, 4);
    }
}
