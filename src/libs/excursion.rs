use crate::libs::messages::Message;
use crate::libs::vacation::{DATE_FORMAT, DATE_NOT_SET};
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single-day activity belonging to exactly one vacation.
///
/// `vacation_id` must reference an existing vacation; the repository checks
/// this before insertion and the store enforces it with a restrict-on-delete
/// foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excursion {
    pub id: Option<i64>,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub vacation_id: i64,
}

impl Excursion {
    pub fn new(title: &str, vacation_id: i64, date: NaiveDate) -> Self {
        Excursion {
            id: None,
            title: title.to_string(),
            date: Some(date),
            vacation_id,
        }
    }

    /// Checks the submission invariants: a non-empty title and a date.
    /// Whether the date falls inside the owning vacation's range is the
    /// caller's check, since it needs the parent record.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            msg_bail_anyhow!(Message::TitleEmpty);
        }
        if self.date.is_none() {
            msg_bail_anyhow!(Message::DateMissing);
        }
        Ok(())
    }

    pub fn date_formatted(&self) -> String {
        match self.date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => DATE_NOT_SET.to_string(),
        }
    }
}
