//! Shared test utilities for mastery-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::{DateTime, TimeZone, Utc};
    use mastery_core::input::{HabitDraft, JournalDraft, NumberInput, StreamDraft};

    use crate::MasteryDb;
    use crate::service::MasteryService;

    /// Create an in-memory `MasteryService`.
    pub async fn test_service() -> MasteryService {
        let db = MasteryDb::open_local(":memory:").await.unwrap();
        MasteryService::from_db(db)
    }

    pub fn stream_draft(name: &str, total: i64, completed: i64) -> StreamDraft {
        StreamDraft {
            name: Some(name.to_string()),
            focus: Some(format!("{name} focus")),
            milestones_total: Some(NumberInput::Integer(total)),
            milestones_completed: Some(NumberInput::Integer(completed)),
            color: Some("#0EA5E9".to_string()),
        }
    }

    pub fn habit_draft(name: &str) -> HabitDraft {
        HabitDraft {
            name: Some(name.to_string()),
            cadence: None,
            context: Some("Before email".to_string()),
        }
    }

    pub fn journal_draft(title: &str, reflection: &str) -> JournalDraft {
        JournalDraft {
            title: Some(title.to_string()),
            reflection: Some(reflection.to_string()),
            mood: Some("Focused".to_string()),
        }
    }

    /// Fixed instant used by tests that pin the clock.
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }
}
