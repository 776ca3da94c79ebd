//! Fire-or-suppress gateway in front of the platform alert channel.
//!
//! The [`Notifier`] caches the persisted `notifications_enabled` preference
//! and consults it before every alert. The actual delivery mechanism sits
//! behind the [`AlertSink`] trait; the default sink renders to the console.
//! Two fixed display slots are reused across alerts, so at most one
//! vacation alert and one excursion alert are visible at a time.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The fixed display slot an alert lands in. Posting to a slot replaces
/// whatever alert it held before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSlot {
    Vacation,
    Excursion,
}

impl AlertSlot {
    pub fn title(&self) -> &'static str {
        match self {
            AlertSlot::Vacation => "Vacation Alert",
            AlertSlot::Excursion => "Excursion Alert",
        }
    }
}

/// Delivery backend for alerts. Implementations must tolerate repeated
/// posts to the same slot.
pub trait AlertSink: Send + Sync {
    fn post(&self, slot: AlertSlot, title: &str, message: &str);
}

/// Renders alerts through the console message layer.
pub struct ConsoleSink;

impl AlertSink for ConsoleSink {
    fn post(&self, slot: AlertSlot, title: &str, message: &str) {
        msg_print!(Message::AlertPosted(format!("{} · {}", slot.title(), title), message.to_string()));
    }
}

/// Decides whether an alert is emitted at all.
///
/// Constructed with the initial preference value and refreshed through
/// [`Notifier::set_enabled`] when the preference changes; it holds only an
/// in-memory cache, the preference itself lives in the config file.
pub struct Notifier {
    enabled: AtomicBool,
    sink: Arc<dyn AlertSink>,
}

impl Notifier {
    pub fn new(enabled: bool, sink: Arc<dyn AlertSink>) -> Self {
        Notifier {
            enabled: AtomicBool::new(enabled),
            sink,
        }
    }

    /// A console-backed notifier, the default for the CLI.
    pub fn console(enabled: bool) -> Self {
        Self::new(enabled, Arc::new(ConsoleSink))
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn vacation_alert(&self, vacation_title: &str, message: &str) {
        self.notify(AlertSlot::Vacation, vacation_title, message);
    }

    pub fn excursion_alert(&self, excursion_title: &str, message: &str) {
        self.notify(AlertSlot::Excursion, excursion_title, message);
    }

    fn notify(&self, slot: AlertSlot, title: &str, message: &str) {
        if !self.is_enabled() {
            msg_debug!(Message::AlertSuppressed(title.to_string()));
            return;
        }
        self.sink.post(slot, title, message);
    }
}
