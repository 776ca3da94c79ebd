//! Core library modules for the vplan application.
//!
//! Serves as the main entry point for all vplan library components.
//!
//! ## Features
//!
//! - **Entity Model**: Vacation and excursion records with validation
//! - **Repository**: Worker-pool backed asynchronous access to the store
//! - **Notifications**: Preference-gated alert gateway
//! - **Scan Jobs**: Date-matching background jobs and their scheduler
//! - **Infrastructure**: Configuration, data paths, messaging, rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vplan::libs::repository::Repository;
//! use vplan::libs::vacation::Vacation;
//! use chrono::NaiveDate;
//!
//! # fn main() -> anyhow::Result<()> {
//! let repository = Repository::open_default(4)?;
//! let vacation = Vacation::new(
//!     "Lisbon",
//!     "Hotel Avenida",
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
//! );
//! let id = repository.add_vacation(vacation).wait()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod excursion;
pub mod messages;
pub mod notifier;
pub mod repository;
pub mod scan;
pub mod scheduler;
pub mod vacation;
pub mod view;
