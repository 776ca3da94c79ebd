//! # Vplan - Vacation Planning and Reminders
//!
//! A command-line utility for recording vacations and their excursions
//! and raising local reminders when a trip is starting, ending, or an
//! excursion falls on the current day.
//!
//! ## Features
//!
//! - **Vacation Management**: Create, update, and delete vacations with
//!   lodging details and an inclusive date range
//! - **Excursion Management**: Single-day activities tied to a vacation,
//!   guarded by referential integrity
//! - **Background Scans**: Periodic jobs that compare stored dates against
//!   "today" and raise alerts for matches
//! - **Notification Preference**: A persisted on/off switch consulted before
//!   any alert is posted
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vplan::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
