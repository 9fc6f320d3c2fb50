//! Workspace import/export documents.
//!
//! Export carries every record in its read shape. Import carries create
//! drafts; the whole document is validated up front so a bad record rejects
//! the import before anything in the store is touched.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{Habit, JournalEntry, LearningStream};
use crate::errors::ValidationError;
use crate::input::{HabitDraft, JournalDraft, NewHabit, NewJournalEntry, NewStream, StreamDraft};

/// Full contents of the workspace, as produced by export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceExport {
    pub streams: Vec<LearningStream>,
    pub habits: Vec<Habit>,
    pub journal_entries: Vec<JournalEntry>,
}

/// Document accepted by import. Missing sections mean "no records".
///
/// Unknown fields are ignored, so an export document imports cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceImport {
    #[serde(default)]
    pub streams: Vec<StreamDraft>,
    #[serde(default)]
    pub habits: Vec<HabitDraft>,
    #[serde(default)]
    pub journal_entries: Vec<JournalDraft>,
}

/// An import document in which every record passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedWorkspace {
    pub streams: Vec<NewStream>,
    pub habits: Vec<NewHabit>,
    pub journal_entries: Vec<NewJournalEntry>,
}

impl ValidatedWorkspace {
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.streams.len() + self.habits.len() + self.journal_entries.len()
    }
}

/// First validation failure found in an import document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{section}[{index}] is invalid")]
pub struct ImportError {
    /// Document section holding the bad record (`streams`, `habits`, `journal_entries`).
    pub section: &'static str,
    /// Zero-based position within that section.
    pub index: usize,
    pub source: ValidationError,
}

impl ImportError {
    /// The field-level message, e.g. `"Name: field is required."`.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.source.user_message()
    }
}

fn validate_section<D, T>(
    drafts: &[D],
    section: &'static str,
    validate: impl Fn(&D) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ImportError> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            validate(draft).map_err(|source| ImportError {
                section,
                index,
                source,
            })
        })
        .collect()
}

impl WorkspaceImport {
    /// Validate every record, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` naming the section, index, and field that failed.
    pub fn validate(&self) -> Result<ValidatedWorkspace, ImportError> {
        Ok(ValidatedWorkspace {
            streams: validate_section(&self.streams, "streams", StreamDraft::validate)?,
            habits: validate_section(&self.habits, "habits", HabitDraft::validate)?,
            journal_entries: validate_section(
                &self.journal_entries,
                "journal_entries",
                JournalDraft::validate,
            )?,
        })
    }
}

impl From<&WorkspaceExport> for WorkspaceImport {
    fn from(export: &WorkspaceExport) -> Self {
        Self {
            streams: export
                .streams
                .iter()
                .map(|s| StreamDraft {
                    name: Some(s.name.clone()),
                    focus: Some(s.focus.clone()),
                    milestones_total: Some(s.milestones_total.into()),
                    milestones_completed: Some(s.milestones_completed.into()),
                    color: Some(s.color.clone()),
                })
                .collect(),
            habits: export
                .habits
                .iter()
                .map(|h| HabitDraft {
                    name: Some(h.name.clone()),
                    cadence: Some(h.cadence.clone()),
                    context: Some(h.context.clone()),
                })
                .collect(),
            journal_entries: export
                .journal_entries
                .iter()
                .map(|e| JournalDraft {
                    title: Some(e.title.clone()),
                    reflection: Some(e.reflection.clone()),
                    mood: Some(e.mood.clone()),
                })
                .collect(),
        }
    }
}
