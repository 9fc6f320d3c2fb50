//! Error responses for the HTTP boundary.
//!
//! Every failure renders as `{"detail": "<message>"}` with the status the
//! caller depends on.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use mastery_core::errors::display_field;
use mastery_db::error::{DatabaseError, StoreError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected before anything was written.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Storage failure; details are logged, not returned.
    #[error("internal error")]
    Internal(#[source] DatabaseError),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Database(db) => Self::Internal(db),
            other => Self::BadRequest(other.user_message().unwrap_or_else(|| other.to_string())),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        Self::Internal(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => Self::BadRequest(field_message(&err.body_text())),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Relabel a body deserialization failure as `"<Field>: <reason>."`.
///
/// axum reports these as `<prefix><path>: <serde reason> at line L column C`,
/// where `<path>` is absent for a failure at the document root.
fn field_message(text: &str) -> String {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
    let detail = detail
        .rfind(" at line ")
        .map_or(detail, |at| &detail[..at]);

    let located = detail
        .split_once(": ")
        .filter(|(path, _)| !path.is_empty() && !path.contains(char::is_whitespace));
    let Some((path, reason)) = located else {
        return format!("Body: {detail}.");
    };

    let segment = path.rsplit('.').next().unwrap_or(path);
    let field = segment.split('[').next().unwrap_or(segment);
    format!("{}: {reason}.", display_field(field))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(source) = &self {
            tracing::error!(error = %source, "request failed");
        }
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
