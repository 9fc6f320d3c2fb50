//! Error types for mastery-db.

use mastery_core::errors::ValidationError;
use mastery_core::workspace::ImportError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned unparseable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors from service operations that validate input before writing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A create draft was rejected; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An import document was rejected; the workspace was left untouched.
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl StoreError {
    /// User-facing message for validation failures, `None` for storage faults.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(err) => Some(err.user_message()),
            Self::Import(err) => Some(err.user_message()),
            Self::Database(_) => None,
        }
    }
}
