//! Display implementation for vplan application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! in the terminal. All user-facing strings live here, in one place, so the
//! rest of the code never embeds literal message text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === VACATION MESSAGES ===
            Message::VacationAdded(title) => format!("Vacation '{}' added", title),
            Message::VacationUpdated(title) => format!("Vacation '{}' updated", title),
            Message::VacationDeleted(title) => format!("Vacation '{}' deleted", title),
            Message::VacationDeleteBlocked(title) => format!("Vacation '{}' still has excursions and was not deleted", title),
            Message::VacationNotFound(id) => format!("No vacation found with ID {}", id),
            Message::VacationListHeader => "Vacations".to_string(),
            Message::VacationsNotFound => "No vacations recorded yet".to_string(),
            Message::ConfirmDeleteVacation(title) => format!("Delete vacation '{}'?", title),

            // === EXCURSION MESSAGES ===
            Message::ExcursionAdded(title) => format!("Excursion '{}' added", title),
            Message::ExcursionUpdated(title) => format!("Excursion '{}' updated", title),
            Message::ExcursionDeleted(title) => format!("Excursion '{}' deleted", title),
            Message::ExcursionNotFound(id) => format!("No excursion found with ID {}", id),
            Message::ExcursionOrphanRejected(id) => format!("Cannot add excursion: no vacation with ID {}", id),
            Message::ExcursionOutsideVacation(date, range) => format!("Excursion date {} is outside the vacation range {}", date, range),
            Message::ExcursionListHeader => "Excursions".to_string(),
            Message::ExcursionsNotFound => "No excursions recorded".to_string(),
            Message::ConfirmDeleteExcursion(title) => format!("Delete excursion '{}'?", title),

            // === VALIDATION MESSAGES ===
            Message::TitleEmpty => "Title must not be empty".to_string(),
            Message::LodgingEmpty => "Lodging must not be empty".to_string(),
            Message::DateOrderInvalid(start, end) => format!("Start date {} is after end date {}", start, end),
            Message::DateMissing => "A date is required".to_string(),

            // === SCAN MESSAGES ===
            Message::ScanStarted(name) => format!("{} scan started", name),
            Message::ScanSucceeded(name) => format!("{} scan finished", name),
            Message::ScanFailed(name) => format!("{} scan failed: result did not arrive in time", name),

            // === NOTIFICATION MESSAGES ===
            Message::NotificationsEnabled => "Notifications enabled".to_string(),
            Message::NotificationsDisabled => "Notifications disabled".to_string(),
            Message::NotificationsStatus(enabled) => {
                format!("Notifications are {}", if *enabled { "enabled" } else { "disabled" })
            }
            Message::AlertPosted(title, text) => format!("{}: {}", title, text),
            Message::AlertSuppressed(title) => format!("Alert for '{}' suppressed: notifications are disabled", title),

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "Configuration file not found, using defaults".to_string(),
            Message::PromptNotificationsEnabled => "Enable notifications".to_string(),
            Message::PromptScanDelayHours => "Delay between scans, hours".to_string(),
            Message::PromptScanWorkers => "Repository worker threads".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted(hours) => format!("Watching for reminders, scanning every {} hours", hours),
            Message::WatchNextRun(when) => format!("Next scan at {}", when),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::RepositoryClosed => "Repository is closed".to_string(),

            // === ERROR MESSAGES ===
            Message::Error(msg) => msg.clone(),
            Message::DbErrorConnection(err) => format!("Failed to connect to database: {}", err),
            Message::DbErrorQuery(err) => format!("Database query failed: {}", err),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),
            Message::ConfigSaveError(err) => format!("Failed to save configuration: {}", err),

            // === CUSTOM MESSAGE ===
            Message::Custom(msg) => msg.clone(),
        };
        write!(f, "{}", message)
    }
}
