use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A daily or weekly ritual with a single "completed today" state.
///
/// Only the most recent check-in date is kept; there is no history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub cadence: String,
    pub context: String,
    pub last_completed_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    #[must_use]
    pub fn is_checked_in_on(&self, day: NaiveDate) -> bool {
        self.last_completed_on == Some(day)
    }

    /// Flip the check-in for `today`: clear it if already set for today,
    /// otherwise mark today.
    pub fn toggle_check_in(&mut self, today: NaiveDate) {
        self.last_completed_on = if self.is_checked_in_on(today) {
            None
        } else {
            Some(today)
        };
    }
}
