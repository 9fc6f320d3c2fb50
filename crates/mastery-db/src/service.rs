//! Service layer over the workspace store.
//!
//! `MasteryService` wraps `MasteryDb`. All repo methods are implemented as
//! `impl MasteryService` blocks under `repos/`.

use crate::MasteryDb;
use crate::error::DatabaseError;

/// Validates drafts and runs every read and mutation against the store.
///
/// Every multi-statement mutation follows this protocol:
/// 1. Validate input (nothing is written on failure)
/// 2. Begin transaction
/// 3. Execute SQL
/// 4. Commit, or roll back on the first error
pub struct MasteryService {
    db: MasteryDb,
}

impl MasteryService {
    /// Create a new service wrapping a local database.
    ///
    /// `db_path` is the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MasteryDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `MasteryDb` (for testing).
    #[must_use]
    pub const fn from_db(db: MasteryDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MasteryDb {
        &self.db
    }
}
