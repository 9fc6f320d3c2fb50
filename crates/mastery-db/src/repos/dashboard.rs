//! Dashboard snapshot over the stored workspace.

use chrono::{DateTime, Local, NaiveDate, Utc};

use mastery_core::metrics::DashboardSnapshot;

use crate::error::DatabaseError;
use crate::service::MasteryService;

impl MasteryService {
    /// Derive every dashboard metric from the current records, using the wall
    /// clock for the reflection window and the local date for check-ins.
    pub async fn dashboard(&self) -> Result<DashboardSnapshot, DatabaseError> {
        self.dashboard_at(Utc::now(), Local::now().date_naive()).await
    }

    pub async fn dashboard_at(
        &self,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<DashboardSnapshot, DatabaseError> {
        let streams = self.list_streams().await?;
        let habits = self.list_habits().await?;
        let entries = self.list_journal_entries().await?;
        Ok(DashboardSnapshot::compute(&streams, &habits, &entries, now, today))
    }
}
