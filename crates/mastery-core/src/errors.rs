//! Error types shared across the mastery tracker.
//!
//! `ValidationError` is raised while normalizing create drafts and renders
//! the user-facing `"<Field>: <reason>."` message directly through `Display`.
//! Storage errors live in `mastery-db`; HTTP mapping lives in `mastery-api`.

use thiserror::Error;

/// Field-level validation failure for a create draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory string field is empty after trimming.
    #[error("{}: field is required.", display_field(.field))]
    RequiredField { field: &'static str },

    /// A numeric field failed to parse or violates its minimum.
    #[error("{}: {reason}.", display_field(.field))]
    InvalidNumber { field: &'static str, reason: String },
}

impl ValidationError {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RequiredField { .. } => "REQUIRED_FIELD",
            Self::InvalidNumber { .. } => "INVALID_NUMBER",
        }
    }

    /// Snake-case name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::RequiredField { field } | Self::InvalidNumber { field, .. } => field,
        }
    }

    /// Message shown to the caller at the UI or HTTP boundary.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Errors raised by callers of the domain layer (CLI, API).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A create draft failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Render a snake-case field name for humans: `milestones_total` -> `Milestones total`.
#[must_use]
pub fn display_field(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}
