//! Centralized user-facing text.
//!
//! Every string the application prints lives in the [`Message`] enum; the
//! `msg_*` macros in [`macros`] decide where it goes.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
