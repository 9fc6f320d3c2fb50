//! Create drafts and their validation into insertable records.
//!
//! Drafts mirror what a form or JSON body provides: every field is optional
//! and numbers may arrive as integers, integral floats or numeric strings.
//! `validate()` trims
//! strings, applies defaults, rejects missing required fields, and clamps
//! `milestones_completed` to `milestones_total`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::clamp_completed;
use crate::errors::ValidationError;

pub const DEFAULT_MILESTONES_TOTAL: u32 = 1;
pub const DEFAULT_CADENCE: &str = "Daily";
pub const DEFAULT_JOURNAL_TITLE: &str = "Untitled insight";
pub const DEFAULT_MOOD: &str = "Curious";

/// A numeric field as typed by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NumberInput {
    Integer(i64),
    /// JSON numbers with a fraction part; only integral values like `4.0` pass.
    Float(f64),
    Text(String),
}

// i64 bounds as exact f64 values: -2^63 is representable, 2^63 is the first value past MAX.
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

impl NumberInput {
    fn parse(&self, field: &'static str) -> Result<i64, ValidationError> {
        let not_whole = || ValidationError::InvalidNumber {
            field,
            reason: "must be a whole number".into(),
        };
        match self {
            Self::Integer(value) => Ok(*value),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(value) => {
                if value.is_finite()
                    && value.fract() == 0.0
                    && *value >= I64_MIN_F64
                    && *value < I64_END_F64
                {
                    Ok(*value as i64)
                } else {
                    Err(not_whole())
                }
            }
            Self::Text(raw) => raw.trim().parse::<i64>().map_err(|_| not_whole()),
        }
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for NumberInput {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn required(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField { field });
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(String::from)
}

fn text_or(value: Option<&str>, default: &str) -> String {
    optional(value).unwrap_or_else(|| default.to_string())
}

/// Parse a number and enforce its lower bound; `None` when the field is absent.
fn number_at_least(
    value: Option<&NumberInput>,
    field: &'static str,
    min: i64,
) -> Result<Option<i64>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = value.parse(field)?;
    if parsed < min {
        let reason = if min == 0 {
            "must not be negative".to_string()
        } else {
            format!("must be at least {min}")
        };
        return Err(ValidationError::InvalidNumber { field, reason });
    }
    Ok(Some(parsed))
}

// ---------------------------------------------------------------------------
// LearningStream
// ---------------------------------------------------------------------------

/// Raw input for creating a learning stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StreamDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub milestones_total: Option<NumberInput>,
    #[serde(default)]
    pub milestones_completed: Option<NumberInput>,
    #[serde(default)]
    pub color: Option<String>,
}

/// A validated stream ready for insertion. `color` stays `None` when the
/// caller omitted it; the store assigns one from the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStream {
    pub name: String,
    pub focus: String,
    pub milestones_total: u32,
    pub milestones_completed: u32,
    pub color: Option<String>,
}

impl StreamDraft {
    /// Normalize and validate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank name or a malformed milestone count.
    pub fn validate(&self) -> Result<NewStream, ValidationError> {
        let name = required(self.name.as_deref(), "name")?;
        let focus = text_or(self.focus.as_deref(), "");
        let milestones_total =
            match number_at_least(self.milestones_total.as_ref(), "milestones_total", 1)? {
                Some(total) => {
                    u32::try_from(total).map_err(|_| ValidationError::InvalidNumber {
                        field: "milestones_total",
                        reason: "is too large".into(),
                    })?
                }
                None => DEFAULT_MILESTONES_TOTAL,
            };
        // Completed is only bounded below; anything past the total clamps.
        let completed =
            number_at_least(self.milestones_completed.as_ref(), "milestones_completed", 0)?
                .unwrap_or(0);

        Ok(NewStream {
            name,
            focus,
            milestones_total,
            milestones_completed: clamp_completed(completed, milestones_total),
            color: optional(self.color.as_deref()),
        })
    }
}

// ---------------------------------------------------------------------------
// Habit
// ---------------------------------------------------------------------------

/// Raw input for creating a habit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HabitDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cadence: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub cadence: String,
    pub context: String,
}

impl HabitDraft {
    /// Normalize and validate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RequiredField` for a blank name.
    pub fn validate(&self) -> Result<NewHabit, ValidationError> {
        Ok(NewHabit {
            name: required(self.name.as_deref(), "name")?,
            cadence: text_or(self.cadence.as_deref(), DEFAULT_CADENCE),
            context: text_or(self.context.as_deref(), ""),
        })
    }
}

// ---------------------------------------------------------------------------
// JournalEntry
// ---------------------------------------------------------------------------

/// Raw input for creating a journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JournalDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub title: String,
    pub reflection: String,
    pub mood: String,
}

impl JournalDraft {
    /// Normalize and validate. A blank title becomes `"Untitled insight"`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RequiredField` for a blank reflection.
    pub fn validate(&self) -> Result<NewJournalEntry, ValidationError> {
        Ok(NewJournalEntry {
            title: text_or(self.title.as_deref(), DEFAULT_JOURNAL_TITLE),
            reflection: required(self.reflection.as_deref(), "reflection")?,
            mood: text_or(self.mood.as_deref(), DEFAULT_MOOD),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn stream_draft(total: NumberInput, completed: NumberInput) -> StreamDraft {
        StreamDraft {
            name: Some("  Systems Design ".into()),
            focus: Some(" Explore bounded contexts ".into()),
            milestones_total: Some(total),
            milestones_completed: Some(completed),
            color: None,
        }
    }

    #[test]
    fn stream_trims_and_keeps_counts() {
        let stream = stream_draft(NumberInput::Integer(4), NumberInput::Integer(1)).validate().unwrap();
        assert_eq!(
            stream,
            NewStream {
                name: "Systems Design".into(),
                focus: "Explore bounded contexts".into(),
                milestones_total: 4,
                milestones_completed: 1,
                color: None,
            }
        );
    }

    #[test]
    fn stream_accepts_numeric_strings() {
        let stream = stream_draft(" 5 ".into(), "2".into()).validate().unwrap();
        assert_eq!(stream.milestones_total, 5);
        assert_eq!(stream.milestones_completed, 2);
    }

    #[test]
    fn stream_clamps_completed_silently() {
        let stream = stream_draft(NumberInput::Integer(3), NumberInput::Integer(9)).validate().unwrap();
        assert_eq!(stream.milestones_completed, 3);
    }

    #[rstest]
    #[case(5, 5_000_000_000, 5)]
    #[case(5, i64::MAX, 5)]
    #[case(5, 0, 0)]
    fn stream_clamps_oversized_completed(
        #[case] total: i64,
        #[case] completed: i64,
        #[case] expected: u32,
    ) {
        let stream = stream_draft(total.into(), completed.into()).validate().unwrap();
        assert_eq!(stream.milestones_completed, expected);
    }

    #[test]
    fn stream_accepts_integral_floats() {
        let stream = stream_draft(NumberInput::Float(4.0), NumberInput::Float(2.0))
            .validate()
            .unwrap();
        assert_eq!(stream.milestones_total, 4);
        assert_eq!(stream.milestones_completed, 2);
    }

    #[rstest]
    #[case(NumberInput::Float(2.5))]
    #[case(NumberInput::Float(f64::NAN))]
    #[case(NumberInput::Float(1e300))]
    fn stream_rejects_fractional_total(#[case] total: NumberInput) {
        let err = stream_draft(total, NumberInput::Integer(0)).validate().unwrap_err();
        assert_eq!(err.user_message(), "Milestones total: must be a whole number.");
    }

    #[test]
    fn stream_defaults_when_counts_missing() {
        let draft = StreamDraft {
            name: Some("Rust".into()),
            ..StreamDraft::default()
        };
        let stream = draft.validate().unwrap();
        assert_eq!(stream.milestones_total, 1);
        assert_eq!(stream.milestones_completed, 0);
        assert_eq!(stream.focus, "");
    }

    #[test]
    fn stream_blank_color_is_absent() {
        let draft = StreamDraft {
            name: Some("Rust".into()),
            color: Some("   ".into()),
            ..StreamDraft::default()
        };
        assert_eq!(draft.validate().unwrap().color, None);
    }

    #[test]
    fn stream_name_checked_before_numbers() {
        let draft = StreamDraft {
            name: Some(String::new()),
            milestones_total: Some("-1".into()),
            ..StreamDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ValidationError::RequiredField { field: "name" });
        assert!(err.user_message().contains("Name"));
    }

    #[rstest]
    #[case(NumberInput::Integer(0), "Milestones total: must be at least 1.")]
    #[case(NumberInput::Integer(-3), "Milestones total: must be at least 1.")]
    #[case(NumberInput::Text("six".into()), "Milestones total: must be a whole number.")]
    #[case(NumberInput::Text(String::new()), "Milestones total: must be a whole number.")]
    #[case(NumberInput::Integer(i64::from(u32::MAX) + 1), "Milestones total: is too large.")]
    fn stream_rejects_bad_total(#[case] total: NumberInput, #[case] message: &str) {
        let err = stream_draft(total, NumberInput::Integer(0)).validate().unwrap_err();
        assert_eq!(err.code(), "INVALID_NUMBER");
        assert_eq!(err.user_message(), message);
    }

    #[test]
    fn stream_rejects_negative_completed() {
        let err = stream_draft(NumberInput::Integer(4), NumberInput::Integer(-1)).validate().unwrap_err();
        assert_eq!(
            err.user_message(),
            "Milestones completed: must not be negative."
        );
    }

    #[test]
    fn habit_defaults_cadence() {
        let habit = HabitDraft {
            name: Some(" Deep Work ".into()),
            cadence: Some("  ".into()),
            context: None,
        }
        .validate()
        .unwrap();
        assert_eq!(habit.name, "Deep Work");
        assert_eq!(habit.cadence, "Daily");
        assert_eq!(habit.context, "");
    }

    #[test]
    fn habit_requires_name() {
        let err = HabitDraft::default().validate().unwrap_err();
        assert_eq!(err.user_message(), "Name: field is required.");
    }

    #[test]
    fn journal_blank_title_defaults() {
        let entry = JournalDraft {
            title: Some("   ".into()),
            reflection: Some(" Vectors ".into()),
            mood: None,
        }
        .validate()
        .unwrap();
        assert_eq!(entry.title, "Untitled insight");
        assert_eq!(entry.reflection, "Vectors");
        assert_eq!(entry.mood, "Curious");
    }

    #[test]
    fn journal_requires_reflection() {
        let err = JournalDraft {
            title: None,
            reflection: Some("  ".into()),
            mood: None,
        }
        .validate()
        .unwrap_err();
        assert!(err.user_message().starts_with("Reflection"));
    }

    #[test]
    fn drafts_deserialize_mixed_number_forms() {
        let draft: StreamDraft = serde_json::from_str(
            r#"{"name":"ML","milestones_total":"3","milestones_completed":1,"id":9}"#,
        )
        .unwrap();
        assert_eq!(draft.milestones_total, Some(NumberInput::Text("3".into())));
        assert_eq!(draft.milestones_completed, Some(NumberInput::Integer(1)));

        let draft: StreamDraft =
            serde_json::from_str(r#"{"name":"ML","milestones_total":4.0}"#).unwrap();
        assert_eq!(draft.milestones_total, Some(NumberInput::Float(4.0)));
    }
}
