//! Habit repository.

use chrono::{DateTime, Local, NaiveDate, Utc};

use mastery_core::entities::Habit;
use mastery_core::input::{HabitDraft, NewHabit};

use crate::error::{DatabaseError, StoreError};
use crate::helpers::{
    format_date, format_datetime, now_micros, parse_datetime, parse_optional_date,
};
use crate::service::MasteryService;

const SELECT_COLUMNS: &str =
    "SELECT id, name, cadence, context, last_completed_on, created_at FROM habits";

fn row_to_habit(row: &libsql::Row) -> Result<Habit, DatabaseError> {
    Ok(Habit {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        cadence: row.get::<String>(2)?,
        context: row.get::<String>(3)?,
        last_completed_on: parse_optional_date(row.get::<Option<String>>(4)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

pub(crate) async fn insert_habit(
    conn: &libsql::Connection,
    habit: &NewHabit,
    last_completed_on: Option<NaiveDate>,
    created_at: DateTime<Utc>,
) -> Result<Habit, DatabaseError> {
    conn.execute(
        "INSERT INTO habits (name, cadence, context, last_completed_on, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            habit.name.as_str(),
            habit.cadence.as_str(),
            habit.context.as_str(),
            last_completed_on.map(format_date),
            format_datetime(created_at)
        ],
    )
    .await?;

    Ok(Habit {
        id: conn.last_insert_rowid(),
        name: habit.name.clone(),
        cadence: habit.cadence.clone(),
        context: habit.context.clone(),
        last_completed_on,
        created_at,
    })
}

pub(crate) async fn fetch_habit(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Habit>, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} WHERE id = ?1"), [id])
        .await?;
    match rows.next().await? {
        Some(row) => row_to_habit(&row).map(Some),
        None => Ok(None),
    }
}

pub(crate) async fn fetch_habits(
    conn: &libsql::Connection,
    order_by: &str,
) -> Result<Vec<Habit>, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} ORDER BY {order_by}"), ())
        .await?;
    let mut habits = Vec::new();
    while let Some(row) = rows.next().await? {
        habits.push(row_to_habit(&row)?);
    }
    Ok(habits)
}

impl MasteryService {
    /// Validate a draft and persist it with no check-in.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` before touching the store if the draft
    /// is invalid.
    pub async fn create_habit(&self, draft: &HabitDraft) -> Result<Habit, StoreError> {
        let habit = draft.validate()?;
        let created = insert_habit(self.db().conn(), &habit, None, now_micros()).await?;
        tracing::debug!(id = created.id, name = %created.name, "created habit");
        Ok(created)
    }

    pub async fn get_habit(&self, id: i64) -> Result<Option<Habit>, DatabaseError> {
        fetch_habit(self.db().conn(), id).await
    }

    /// All habits, newest first.
    pub async fn list_habits(&self) -> Result<Vec<Habit>, DatabaseError> {
        fetch_habits(self.db().conn(), "created_at DESC, id DESC").await
    }

    /// Flip today's check-in using the process-local calendar date.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the read-modify-write transaction fails.
    pub async fn toggle_habit_check_in(&self, id: i64) -> Result<Option<Habit>, DatabaseError> {
        self.toggle_habit_check_in_on(id, Local::now().date_naive())
            .await
    }

    /// Flip the check-in for `today`: cleared if already set for that date,
    /// otherwise set to it. Returns `None` without writing if the habit is gone.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the read-modify-write transaction fails.
    pub async fn toggle_habit_check_in_on(
        &self,
        id: i64,
        today: NaiveDate,
    ) -> Result<Option<Habit>, DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        let Some(mut habit) = fetch_habit(&tx, id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };
        habit.toggle_check_in(today);

        tx.execute(
            "UPDATE habits SET last_completed_on = ?1 WHERE id = ?2",
            libsql::params![habit.last_completed_on.map(format_date), id],
        )
        .await?;
        tx.commit().await?;

        tracing::debug!(id, checked_in = habit.is_checked_in_on(today), "toggled habit check-in");
        Ok(Some(habit))
    }

    /// Remove a habit. Returns whether a row was deleted.
    pub async fn delete_habit(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM habits WHERE id = ?1", [id])
            .await?;
        tracing::debug!(id, affected, "deleted habit");
        Ok(affected > 0)
    }
}
