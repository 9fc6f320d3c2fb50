pub mod dashboard;
pub mod dispatch;
pub mod habit;
pub mod journal;
pub mod schema;
pub mod serve;
pub mod stream;
pub mod workspace;

use serde::Serialize;

use mastery_core::errors::CoreError;

/// Confirmation printed after a delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: i64,
    pub deleted: bool,
}

/// Turn a missing record into a `not found` error naming the entity.
pub fn require<T>(record: Option<T>, entity: &'static str, id: i64) -> Result<T, CoreError> {
    record.ok_or(CoreError::NotFound { entity, id })
}

/// A delete that removed nothing is reported as `not found`.
pub fn require_deleted(removed: bool, entity: &'static str, id: i64) -> Result<Deleted, CoreError> {
    if removed {
        Ok(Deleted { id, deleted: true })
    } else {
        Err(CoreError::NotFound { entity, id })
    }
}
