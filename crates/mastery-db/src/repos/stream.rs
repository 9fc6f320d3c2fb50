//! Learning stream repository.

use chrono::{DateTime, Utc};

use mastery_core::entities::LearningStream;
use mastery_core::input::{NewStream, StreamDraft};

use crate::error::{DatabaseError, StoreError};
use crate::helpers::{format_datetime, get_u32, now_micros, parse_datetime};
use crate::random_color;
use crate::service::MasteryService;

const SELECT_COLUMNS: &str =
    "SELECT id, name, focus, milestones_total, milestones_completed, color, created_at
     FROM learning_streams";

fn row_to_stream(row: &libsql::Row) -> Result<LearningStream, DatabaseError> {
    Ok(LearningStream {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        focus: row.get::<String>(2)?,
        milestones_total: get_u32(row, 3)?,
        milestones_completed: get_u32(row, 4)?,
        color: row.get::<String>(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Insert a validated stream on `conn` and return the stored record.
///
/// Shared by single creates and the import transaction.
pub(crate) async fn insert_stream(
    conn: &libsql::Connection,
    stream: &NewStream,
    created_at: DateTime<Utc>,
) -> Result<LearningStream, DatabaseError> {
    let color = match &stream.color {
        Some(color) => color.clone(),
        None => random_color(conn).await?,
    };

    conn.execute(
        "INSERT INTO learning_streams (name, focus, milestones_total, milestones_completed, color, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        libsql::params![
            stream.name.as_str(),
            stream.focus.as_str(),
            i64::from(stream.milestones_total),
            i64::from(stream.milestones_completed),
            color.as_str(),
            format_datetime(created_at)
        ],
    )
    .await?;

    Ok(LearningStream {
        id: conn.last_insert_rowid(),
        name: stream.name.clone(),
        focus: stream.focus.clone(),
        milestones_total: stream.milestones_total,
        milestones_completed: stream.milestones_completed,
        color,
        created_at,
    })
}

pub(crate) async fn fetch_stream(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<LearningStream>, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id])
        .await?;
    match rows.next().await? {
        Some(row) => row_to_stream(&row).map(Some),
        None => Ok(None),
    }
}

pub(crate) async fn fetch_streams(
    conn: &libsql::Connection,
    order_by: &str,
) -> Result<Vec<LearningStream>, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} ORDER BY {order_by}"), ())
        .await?;
    let mut streams = Vec::new();
    while let Some(row) = rows.next().await? {
        streams.push(row_to_stream(&row)?);
    }
    Ok(streams)
}

impl MasteryService {
    /// Validate a draft and persist it. A missing color is drawn from the palette.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` before touching the store if the draft
    /// is invalid.
    pub async fn create_stream(&self, draft: &StreamDraft) -> Result<LearningStream, StoreError> {
        let stream = draft.validate()?;
        let created = insert_stream(self.db().conn(), &stream, now_micros()).await?;
        tracing::debug!(id = created.id, name = %created.name, "created learning stream");
        Ok(created)
    }

    pub async fn get_stream(&self, id: i64) -> Result<Option<LearningStream>, DatabaseError> {
        fetch_stream(self.db().conn(), id).await
    }

    /// All streams, newest first.
    pub async fn list_streams(&self) -> Result<Vec<LearningStream>, DatabaseError> {
        fetch_streams(self.db().conn(), "created_at DESC, id DESC").await
    }

    /// Shift completed milestones by `delta`, clamped to `[0, milestones_total]`.
    ///
    /// Returns `None` without writing if the stream does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the read-modify-write transaction fails.
    pub async fn update_stream_progress(
        &self,
        id: i64,
        delta: i64,
    ) -> Result<Option<LearningStream>, DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        let Some(mut stream) = fetch_stream(&tx, id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };
        let before = stream.milestones_completed;
        stream.apply_progress(delta);

        if stream.milestones_completed != before {
            tx.execute(
                "UPDATE learning_streams SET milestones_completed = ?1 WHERE id = ?2",
                libsql::params![i64::from(stream.milestones_completed), id],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::debug!(id, delta, completed = stream.milestones_completed, "updated stream progress");
        Ok(Some(stream))
    }

    /// Remove a stream. Returns whether a row was deleted.
    pub async fn delete_stream(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM learning_streams WHERE id = ?1", [id])
            .await?;
        tracing::debug!(id, affected, "deleted learning stream");
        Ok(affected > 0)
    }
}
