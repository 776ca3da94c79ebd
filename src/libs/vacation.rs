use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage and display pattern for all vacation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder shown when a date has not been set yet.
pub const DATE_NOT_SET: &str = "Not set";

/// A trip record with a title, lodging, and inclusive date range.
///
/// `id` is `None` until the store assigns one on first insert. Dates are
/// validated at the point of submission, not re-checked by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacation {
    pub id: Option<i64>,
    pub title: String,
    pub lodging: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Vacation {
    pub fn new(title: &str, lodging: &str, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Vacation {
            id: None,
            title: title.to_string(),
            lodging: lodging.to_string(),
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    /// Checks the submission invariants: non-empty display fields and
    /// `start_date <= end_date`.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            msg_bail_anyhow!(Message::TitleEmpty);
        }
        if self.lodging.trim().is_empty() {
            msg_bail_anyhow!(Message::LodgingEmpty);
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                msg_bail_anyhow!(Message::DateOrderInvalid(
                    start.format(DATE_FORMAT).to_string(),
                    end.format(DATE_FORMAT).to_string()
                ));
            }
        }
        Ok(())
    }

    pub fn start_date_formatted(&self) -> String {
        match self.start_date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => DATE_NOT_SET.to_string(),
        }
    }

    pub fn end_date_formatted(&self) -> String {
        match self.end_date {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => DATE_NOT_SET.to_string(),
        }
    }

    /// The inclusive range as display text, e.g. `2024-06-01 .. 2024-06-10`.
    pub fn range_formatted(&self) -> String {
        format!("{} .. {}", self.start_date_formatted(), self.end_date_formatted())
    }

    /// True when `date` falls inside the inclusive `[start_date, end_date]`
    /// range. A vacation with either boundary unset accepts any date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }
}
