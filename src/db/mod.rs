//! Database layer for the vplan application.
//!
//! Provides the durable storage for vacations and excursions, built on
//! SQLite. One module per table, each owning its own connection, with the
//! excursion table holding a restrict-on-delete foreign key to the vacation
//! table. Referential integrity is enforced per connection through
//! `PRAGMA foreign_keys = ON`.
//!
//! Store operations are synchronous; all concurrency control lives in the
//! repository, which runs every operation on its worker pool.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vplan::db::vacations::Vacations;
//! use vplan::libs::vacation::Vacation;
//! use chrono::NaiveDate;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut vacations = Vacations::new()?;
//! let vacation = Vacation::new(
//!     "Lisbon",
//!     "Hotel Avenida",
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
//! );
//! let id = vacations.insert(&vacation)?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite file and switches on
/// foreign-key enforcement for the connection.
pub mod db;

/// Vacation table operations.
pub mod vacations;

/// Excursion table operations.
///
/// Excursions reference their owning vacation through a restrict-on-delete
/// foreign key, so a referenced vacation cannot be removed at the schema
/// level either.
pub mod excursions;
