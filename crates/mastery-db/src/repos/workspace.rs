//! Workspace import and export.
//!
//! Export snapshots all three collections in insertion order. Import is a
//! full replace: the document is validated completely, then one transaction
//! deletes every existing record and inserts the new ones. A failure at any
//! point leaves the prior workspace untouched.

use chrono::{DateTime, Utc};
use serde::Serialize;

use mastery_core::workspace::{ValidatedWorkspace, WorkspaceExport, WorkspaceImport};

use crate::error::{DatabaseError, StoreError};
use crate::helpers::now_micros;
use crate::repos::habit::{fetch_habits, insert_habit};
use crate::repos::journal::{fetch_entries, insert_entry};
use crate::repos::stream::{fetch_streams, insert_stream};
use crate::service::MasteryService;

const EXPORT_ORDER: &str = "id ASC";

/// Record counts written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub streams: usize,
    pub habits: usize,
    pub journal_entries: usize,
}

async fn write_workspace(
    conn: &libsql::Connection,
    workspace: &ValidatedWorkspace,
    created_at: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM journal_entries", ()).await?;
    conn.execute("DELETE FROM habits", ()).await?;
    conn.execute("DELETE FROM learning_streams", ()).await?;

    for stream in &workspace.streams {
        insert_stream(conn, stream, created_at).await?;
    }
    for habit in &workspace.habits {
        insert_habit(conn, habit, None, created_at).await?;
    }
    for entry in &workspace.journal_entries {
        insert_entry(conn, entry, created_at).await?;
    }
    Ok(())
}

impl MasteryService {
    /// Snapshot every record, each collection in id order.
    pub async fn export_workspace(&self) -> Result<WorkspaceExport, DatabaseError> {
        let conn = self.db().conn();
        let export = WorkspaceExport {
            streams: fetch_streams(conn, EXPORT_ORDER).await?,
            habits: fetch_habits(conn, EXPORT_ORDER).await?,
            journal_entries: fetch_entries(conn, EXPORT_ORDER).await?,
        };
        tracing::info!(
            streams = export.streams.len(),
            habits = export.habits.len(),
            journal_entries = export.journal_entries.len(),
            "exported workspace"
        );
        Ok(export)
    }

    /// Validate an import document and replace the workspace with it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Import` for the first invalid record (nothing is
    /// deleted), or `StoreError::Database` if the replace transaction fails
    /// (rolled back, prior contents kept).
    pub async fn import_workspace(
        &self,
        document: &WorkspaceImport,
    ) -> Result<ImportSummary, StoreError> {
        let workspace = document.validate()?;
        Ok(self.replace_workspace(&workspace).await?)
    }

    /// Atomically replace all three collections with already-validated records.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any statement fails; the transaction is
    /// rolled back first.
    pub async fn replace_workspace(
        &self,
        workspace: &ValidatedWorkspace,
    ) -> Result<ImportSummary, DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        if let Err(error) = write_workspace(&tx, workspace, now_micros()).await {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(%rollback_error, "import rollback failed");
            }
            return Err(error);
        }
        tx.commit().await?;

        let summary = ImportSummary {
            streams: workspace.streams.len(),
            habits: workspace.habits.len(),
            journal_entries: workspace.journal_entries.len(),
        };
        tracing::info!(?summary, "replaced workspace");
        Ok(summary)
    }
}
