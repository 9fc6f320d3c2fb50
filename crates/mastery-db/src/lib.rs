//! # mastery-db
//!
//! libSQL storage for the mastery tracker workspace.
//!
//! Holds the three record collections (learning streams, habits, journal
//! entries), their CRUD repositories, the all-or-nothing workspace replace
//! used by import, and the dashboard snapshot computed from stored records.
//!
//! Uses the `libsql` crate in local mode; `":memory:"` gives a throwaway
//! store for tests.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

use mastery_core::palette::palette_color;

/// Central database handle for workspace state.
///
/// Wraps a libSQL database and its single connection.
pub struct MasteryDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl MasteryDb {
    /// Open a local database at the given path.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let mastery_db = Self { db, conn };
        mastery_db.run_migrations().await?;
        tracing::debug!(path, "opened mastery store");
        Ok(mastery_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

/// Draw a palette swatch using `SQLite`'s `random()`.
///
/// Takes a connection so it also works inside an open transaction.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or returns no rows.
pub async fn random_color(conn: &libsql::Connection) -> Result<String, DatabaseError> {
    let mut rows = conn.query("SELECT abs(random() % 6)", ()).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let seed = u64::try_from(row.get::<i64>(0)?).unwrap_or_default();
    Ok(palette_color(seed).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastery_core::palette::COLOR_PALETTE;

    async fn test_db() -> MasteryDb {
        MasteryDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["learning_streams", "habits", "journal_entries"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn random_color_draws_from_palette() {
        let db = test_db().await;
        for _ in 0..50 {
            let color = random_color(db.conn()).await.unwrap();
            assert!(COLOR_PALETTE.contains(&color.as_str()), "{color}");
        }
    }

    #[tokio::test]
    async fn schema_rejects_completed_above_total() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO learning_streams (name, milestones_total, milestones_completed)
                 VALUES ('Overflow', 2, 3)",
                (),
            )
            .await;
        assert!(result.is_err(), "CHECK constraint should reject completed > total");
    }

    #[tokio::test]
    async fn default_created_at_matches_stored_format() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO journal_entries (reflection) VALUES ('Hand-inserted')", ())
            .await
            .unwrap();
        let mut rows = db
            .conn()
            .query("SELECT created_at FROM journal_entries", ())
            .await
            .unwrap();
        let stored = rows.next().await.unwrap().unwrap().get::<String>(0).unwrap();

        let parsed = helpers::parse_datetime(&stored).unwrap();
        assert_eq!(stored, helpers::format_datetime(parsed));
        assert_eq!(stored.len(), "2026-03-14T09:05:00.000000Z".len());
    }

    #[tokio::test]
    async fn column_defaults_match_domain_defaults() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO habits (name) VALUES ('Deep Work')", ())
            .await
            .unwrap();
        let mut rows = db
            .conn()
            .query("SELECT cadence, context, last_completed_on FROM habits", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Daily");
        assert_eq!(row.get::<String>(1).unwrap(), "");
        assert_eq!(row.get::<Option<String>>(2).unwrap(), None);
    }
}
