//! Configuration management for the vplan application.
//!
//! Settings live in a JSON file in the platform data directory. The file
//! carries the persisted notification preference consulted by the alert
//! gateway, plus the scan scheduling parameters. A missing file means
//! defaults; `vplan init` runs the interactive wizard.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Scan scheduling parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScanConfig {
    /// Fixed delay between scheduling rounds, in hours.
    pub delay_hours: u64,
    /// How long a scan job waits for its repository reply, in seconds.
    pub wait_limit_secs: u64,
    /// Size of the repository worker pool.
    pub workers: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            delay_hours: 24,
            wait_limit_secs: 30,
            workers: 4,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// The persisted user preference behind the notification gateway.
    pub notifications_enabled: bool,
    #[serde(default)]
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notifications_enabled: true,
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    fn file_path() -> Result<PathBuf> {
        DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| msg_error_anyhow!(Message::ConfigSaveError(e.to_string())))
    }

    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Self> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        let file = File::create(Self::file_path()?)?;
        serde_json::to_writer_pretty(file, self).map_err(|e| msg_error_anyhow!(Message::ConfigSaveError(e.to_string())))?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        let path = Self::file_path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let notifications_enabled = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNotificationsEnabled.to_string())
            .default(current.notifications_enabled)
            .interact()?;

        let delay_hours: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptScanDelayHours.to_string())
            .default(current.scan.delay_hours)
            .interact_text()?;

        let workers: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptScanWorkers.to_string())
            .default(current.scan.workers)
            .interact_text()?;

        Ok(Config {
            notifications_enabled,
            scan: ScanConfig {
                delay_hours,
                wait_limit_secs: current.scan.wait_limit_secs,
                workers,
            },
        })
    }
}
