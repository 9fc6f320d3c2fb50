//! Journal entry repository.

use chrono::{DateTime, Utc};

use mastery_core::entities::JournalEntry;
use mastery_core::input::{JournalDraft, NewJournalEntry};

use crate::error::{DatabaseError, StoreError};
use crate::helpers::{format_datetime, now_micros, parse_datetime};
use crate::service::MasteryService;

const SELECT_COLUMNS: &str =
    "SELECT id, title, reflection, mood, created_at FROM journal_entries";

fn row_to_entry(row: &libsql::Row) -> Result<JournalEntry, DatabaseError> {
    Ok(JournalEntry {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        reflection: row.get::<String>(2)?,
        mood: row.get::<String>(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

pub(crate) async fn insert_entry(
    conn: &libsql::Connection,
    entry: &NewJournalEntry,
    created_at: DateTime<Utc>,
) -> Result<JournalEntry, DatabaseError> {
    conn.execute(
        "INSERT INTO journal_entries (title, reflection, mood, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            entry.title.as_str(),
            entry.reflection.as_str(),
            entry.mood.as_str(),
            format_datetime(created_at)
        ],
    )
    .await?;

    Ok(JournalEntry {
        id: conn.last_insert_rowid(),
        title: entry.title.clone(),
        reflection: entry.reflection.clone(),
        mood: entry.mood.clone(),
        created_at,
    })
}

pub(crate) async fn fetch_entries(
    conn: &libsql::Connection,
    order_by: &str,
) -> Result<Vec<JournalEntry>, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} ORDER BY {order_by}"), ())
        .await?;
    let mut entries = Vec::new();
    while let Some(row) = rows.next().await? {
        entries.push(row_to_entry(&row)?);
    }
    Ok(entries)
}

impl MasteryService {
    /// Validate a draft and persist it. A blank title becomes "Untitled insight".
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the reflection is blank.
    pub async fn create_journal_entry(
        &self,
        draft: &JournalDraft,
    ) -> Result<JournalEntry, StoreError> {
        let entry = draft.validate()?;
        let created = insert_entry(self.db().conn(), &entry, now_micros()).await?;
        tracing::debug!(id = created.id, title = %created.title, "created journal entry");
        Ok(created)
    }

    pub async fn get_journal_entry(&self, id: i64) -> Result<Option<JournalEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => row_to_entry(&row).map(Some),
            None => Ok(None),
        }
    }

    /// All entries, newest first.
    pub async fn list_journal_entries(&self) -> Result<Vec<JournalEntry>, DatabaseError> {
        fetch_entries(self.db().conn(), "created_at DESC, id DESC").await
    }

    pub async fn delete_journal_entry(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM journal_entries WHERE id = ?1", [id])
            .await?;
        tracing::debug!(id, affected, "deleted journal entry");
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use mastery_core::errors::ValidationError;
    use mastery_core::input::{DEFAULT_JOURNAL_TITLE, DEFAULT_MOOD};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{journal_draft, test_service};

    #[tokio::test]
    async fn blank_title_and_mood_fall_back_to_defaults() {
        let svc = test_service().await;
        let draft = JournalDraft {
            title: Some("   ".into()),
            reflection: Some("  Ownership clicked today.  ".into()),
            mood: None,
        };
        let created = svc.create_journal_entry(&draft).await.unwrap();

        assert_eq!(created.title, DEFAULT_JOURNAL_TITLE);
        assert_eq!(created.reflection, "Ownership clicked today.");
        assert_eq!(created.mood, DEFAULT_MOOD);
    }

    #[tokio::test]
    async fn blank_reflection_is_rejected() {
        let svc = test_service().await;
        let err = svc
            .create_journal_entry(&journal_draft("Title", " "))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::RequiredField { field: "reflection" })
        ));
        assert_eq!(
            err.user_message().as_deref(),
            Some("Reflection: field is required.")
        );
    }

    #[tokio::test]
    async fn get_list_and_delete() {
        let svc = test_service().await;
        let older = svc
            .create_journal_entry(&journal_draft("Older", "First note"))
            .await
            .unwrap();
        let newer = svc
            .create_journal_entry(&journal_draft("Newer", "Second note"))
            .await
            .unwrap();

        let titles: Vec<String> = svc
            .list_journal_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Newer", "Older"]);

        assert_eq!(svc.get_journal_entry(older.id).await.unwrap(), Some(older.clone()));
        assert!(svc.delete_journal_entry(newer.id).await.unwrap());
        assert_eq!(svc.list_journal_entries().await.unwrap(), vec![older]);
    }
}
