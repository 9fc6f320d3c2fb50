//! Dashboard metrics derived from the current record sets.
//!
//! Everything here is a pure function of its inputs; callers pass the clock
//! (`now` for the rolling reflection window, `today` for habit check-ins) so
//! the two notions of time stay distinct and testable.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Habit, JournalEntry, LearningStream};
use crate::text::preview;

pub const ALL_STREAMS_COMPLETE: &str = "All learning streams are fully complete.";
pub const NO_HABITS_MESSAGE: &str = "Create a ritual to build your execution rhythm.";
pub const NO_REFLECTIONS_TITLE: &str = "No reflections yet";
pub const NO_REFLECTIONS_PREVIEW: &str = "Capture your latest insight to build your mastery journal.";

/// Width of the rolling reflection window.
pub const REFLECTION_WINDOW_DAYS: i64 = 7;

/// Round `numer / denom` to the nearest integer, ties to even.
///
/// Exact integer arithmetic, so `.5` boundaries are never perturbed by
/// floating point.
const fn round_half_even(numer: u64, denom: u64) -> u64 {
    let quotient = numer / denom;
    let twice_remainder = (numer % denom) * 2;
    if twice_remainder > denom || (twice_remainder == denom && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

fn milestone_sums(streams: &[LearningStream]) -> (u64, u64) {
    streams.iter().fold((0, 0), |(completed, total), stream| {
        (
            completed + u64::from(stream.milestones_completed),
            total + u64::from(stream.milestones_total),
        )
    })
}

/// Percentage of milestones completed across all streams, `0` when there are none.
///
/// Uses round-half-to-even: 12.5% reports as 12, 37.5% as 38.
#[must_use]
pub fn milestone_completion(streams: &[LearningStream]) -> u32 {
    let (completed, total) = milestone_sums(streams);
    if total == 0 {
        return 0;
    }
    u32::try_from(round_half_even(completed * 100, total)).unwrap_or(100)
}

/// Completed and total milestones as `"CC/TT"`.
#[must_use]
pub fn milestone_copy(streams: &[LearningStream]) -> String {
    let (completed, total) = milestone_sums(streams);
    if total == 0 {
        return "00/00".to_string();
    }
    format!("{completed:02}/{total:02}")
}

#[must_use]
pub const fn milestone_trend_message(completion: u32) -> &'static str {
    if completion >= 75 {
        "Momentum is compounding. Keep shipping!"
    } else if completion >= 40 {
        "Solid traction. Review blockers to accelerate."
    } else if completion > 0 {
        "Early progress logged. Lean into the next milestone."
    } else {
        "Set your first milestone to start tracking mastery."
    }
}

/// Habits whose last check-in falls on `today` (calendar-date equality).
#[must_use]
pub fn habits_completed_today(habits: &[Habit], today: NaiveDate) -> usize {
    habits
        .iter()
        .filter(|habit| habit.is_checked_in_on(today))
        .count()
}

#[must_use]
pub fn habit_consistency_copy(habits: &[Habit], today: NaiveDate) -> String {
    if habits.is_empty() {
        return NO_HABITS_MESSAGE.to_string();
    }
    format!(
        "{} of {} rituals logged today",
        habits_completed_today(habits, today),
        habits.len()
    )
}

/// Entries created within the trailing 7x24h window ending at `now`.
#[must_use]
pub fn reflections_this_week(entries: &[JournalEntry], now: DateTime<Utc>) -> usize {
    let window_start = now - Duration::days(REFLECTION_WINDOW_DAYS);
    entries
        .iter()
        .filter(|entry| entry.created_at >= window_start)
        .count()
}

/// Describe the oldest stream that still has milestones left.
#[must_use]
pub fn next_stream_message(streams: &[LearningStream]) -> String {
    streams
        .iter()
        .filter(|stream| !stream.is_complete())
        .min_by_key(|stream| (stream.created_at, stream.id))
        .map_or_else(
            || ALL_STREAMS_COMPLETE.to_string(),
            |stream| {
                let remaining = stream.remaining();
                let label = if remaining == 1 { "milestone" } else { "milestones" };
                format!("{}: {remaining} {label} to go", stream.name)
            },
        )
}

#[must_use]
pub fn streams_active_count(streams: &[LearningStream]) -> usize {
    streams.iter().filter(|stream| !stream.is_complete()).count()
}

fn latest_entry(entries: &[JournalEntry]) -> Option<&JournalEntry> {
    entries
        .iter()
        .max_by_key(|entry| (entry.created_at, entry.id))
}

/// Every derived dashboard value, recomputed from scratch on each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DashboardSnapshot {
    pub total_streams: usize,
    pub total_habits: usize,
    pub journal_count: usize,
    pub milestone_completion: u32,
    pub milestone_copy: String,
    pub milestone_detail: String,
    pub milestone_trend_message: String,
    pub habits_completed_today: usize,
    pub habit_consistency_copy: String,
    pub reflections_this_week: usize,
    pub next_stream_message: String,
    pub streams_active_count: usize,
    pub latest_journal_title: String,
    pub latest_journal_preview: String,
}

impl DashboardSnapshot {
    #[must_use]
    pub fn compute(
        streams: &[LearningStream],
        habits: &[Habit],
        entries: &[JournalEntry],
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Self {
        let completion = milestone_completion(streams);
        let copy = milestone_copy(streams);
        let latest = latest_entry(entries);

        Self {
            total_streams: streams.len(),
            total_habits: habits.len(),
            journal_count: entries.len(),
            milestone_completion: completion,
            milestone_detail: format!("Secured milestones {copy}"),
            milestone_copy: copy,
            milestone_trend_message: milestone_trend_message(completion).to_string(),
            habits_completed_today: habits_completed_today(habits, today),
            habit_consistency_copy: habit_consistency_copy(habits, today),
            reflections_this_week: reflections_this_week(entries, now),
            next_stream_message: next_stream_message(streams),
            streams_active_count: streams_active_count(streams),
            latest_journal_title: latest
                .map_or_else(|| NO_REFLECTIONS_TITLE.to_string(), |e| e.title.clone()),
            latest_journal_preview: latest.map_or_else(
                || NO_REFLECTIONS_PREVIEW.to_string(),
                |e| preview(&e.reflection),
            ),
        }
    }
}
