//! Demo records for a fresh workspace.

use chrono::{Local, NaiveDate};

use mastery_core::input::{NewHabit, NewJournalEntry, NewStream};

use crate::error::DatabaseError;
use crate::helpers::now_micros;
use crate::repos::habit::insert_habit;
use crate::repos::journal::insert_entry;
use crate::repos::stream::insert_stream;
use crate::service::MasteryService;

fn demo_streams() -> Vec<NewStream> {
    vec![
        NewStream {
            name: "AI Engineering".into(),
            focus: "Ship a conversational AI mentor that personalises study sprints.".into(),
            milestones_total: 6,
            milestones_completed: 4,
            color: Some("#6366F1".into()),
        },
        NewStream {
            name: "Product Strategy".into(),
            focus: "Run weekly experiments to tighten the build-measure-learn loop.".into(),
            milestones_total: 5,
            milestones_completed: 2,
            color: Some("#22C55E".into()),
        },
    ]
}

fn demo_habits() -> [(NewHabit, bool); 2] {
    [
        (
            NewHabit {
                name: "Deep Work Block".into(),
                cadence: "Daily".into(),
                context: "90 minutes of focused creation before meetings.".into(),
            },
            true,
        ),
        (
            NewHabit {
                name: "Knowledge Capture".into(),
                cadence: "Daily".into(),
                context: "Summarise the top learning insight in the vault.".into(),
            },
            false,
        ),
    ]
}

fn demo_entries() -> Vec<NewJournalEntry> {
    vec![
        NewJournalEntry {
            title: "Synthesised a practice loop".into(),
            reflection: "Mapped how research notes flow into prototypes and user feedback."
                .into(),
            mood: "Energised".into(),
        },
        NewJournalEntry {
            title: "Reframed blockers".into(),
            reflection: "Used the five whys to unblock the onboarding flow redesign.".into(),
            mood: "Curious".into(),
        },
    ]
}

async fn table_is_empty(conn: &libsql::Connection, table: &str) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT NOT EXISTS (SELECT 1 FROM {table})"), ())
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)? != 0)
}

async fn seed_empty_tables(
    conn: &libsql::Connection,
    today: NaiveDate,
) -> Result<usize, DatabaseError> {
    let now = now_micros();
    let mut inserted = 0;

    if table_is_empty(conn, "learning_streams").await? {
        for stream in demo_streams() {
            insert_stream(conn, &stream, now).await?;
            inserted += 1;
        }
    }
    if table_is_empty(conn, "habits").await? {
        for (habit, checked_in) in demo_habits() {
            insert_habit(conn, &habit, checked_in.then_some(today), now).await?;
            inserted += 1;
        }
    }
    if table_is_empty(conn, "journal_entries").await? {
        for entry in demo_entries() {
            insert_entry(conn, &entry, now).await?;
            inserted += 1;
        }
    }
    Ok(inserted)
}

impl MasteryService {
    /// Fill each empty collection with sample records. Collections that
    /// already hold data are left alone. Returns the number of records added.
    pub async fn seed_demo_data(&self) -> Result<usize, DatabaseError> {
        self.seed_demo_data_on(Local::now().date_naive()).await
    }

    /// Like [`Self::seed_demo_data`], with "Deep Work Block" checked in on `today`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the seeding transaction fails; nothing is
    /// written in that case.
    pub async fn seed_demo_data_on(&self, today: NaiveDate) -> Result<usize, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let inserted = match seed_empty_tables(&tx, today).await {
            Ok(inserted) => inserted,
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, "seed rollback failed");
                }
                return Err(error);
            }
        };
        tx.commit().await?;

        if inserted > 0 {
            tracing::info!(inserted, "seeded demo data");
        }
        Ok(inserted)
    }
}
