//! API route handlers

use axum::{
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use mastery_core::entities::{Habit, JournalEntry, LearningStream};
use mastery_core::input::{HabitDraft, JournalDraft, StreamDraft};
use mastery_core::metrics::DashboardSnapshot;
use mastery_core::workspace::{WorkspaceExport, WorkspaceImport};
use mastery_db::repos::workspace::ImportSummary;

use crate::SharedState;
use crate::error::ApiError;

type ApiResult<T> = Result<T, ApiError>;
type JsonBody<T> = Result<Json<T>, JsonRejection>;
type RecordId = Result<Path<i64>, PathRejection>;

fn found<T>(record: Option<T>, entity: &'static str) -> ApiResult<Json<T>> {
    match record {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound { entity }),
    }
}

fn deleted(removed: bool, entity: &'static str) -> ApiResult<StatusCode> {
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound { entity })
    }
}

// === Learning streams ===

/// GET /api/streams
pub async fn list_streams(State(state): State<SharedState>) -> ApiResult<Json<Vec<LearningStream>>> {
    let svc = state.read().await;
    Ok(Json(svc.list_streams().await?))
}

/// POST /api/streams
pub async fn create_stream(
    State(state): State<SharedState>,
    payload: JsonBody<StreamDraft>,
) -> ApiResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let svc = state.write().await;
    let created = svc.create_stream(&draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/streams/:id
pub async fn get_stream(
    State(state): State<SharedState>,
    id: RecordId,
) -> ApiResult<Json<LearningStream>> {
    let Path(id) = id?;
    let svc = state.read().await;
    found(svc.get_stream(id).await?, "Stream")
}

/// DELETE /api/streams/:id
pub async fn delete_stream(
    State(state): State<SharedState>,
    id: RecordId,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    let svc = state.write().await;
    deleted(svc.delete_stream(id).await?, "Stream")
}

/// POST /api/streams/:id/progress
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub delta: i64,
}

pub async fn update_progress(
    State(state): State<SharedState>,
    id: RecordId,
    payload: JsonBody<ProgressRequest>,
) -> ApiResult<Json<LearningStream>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let svc = state.write().await;
    found(svc.update_stream_progress(id, request.delta).await?, "Stream")
}

// === Habits ===

/// GET /api/habits
pub async fn list_habits(State(state): State<SharedState>) -> ApiResult<Json<Vec<Habit>>> {
    let svc = state.read().await;
    Ok(Json(svc.list_habits().await?))
}

/// POST /api/habits
pub async fn create_habit(
    State(state): State<SharedState>,
    payload: JsonBody<HabitDraft>,
) -> ApiResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let svc = state.write().await;
    let created = svc.create_habit(&draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/habits/:id
pub async fn get_habit(
    State(state): State<SharedState>,
    id: RecordId,
) -> ApiResult<Json<Habit>> {
    let Path(id) = id?;
    let svc = state.read().await;
    found(svc.get_habit(id).await?, "Habit")
}

/// DELETE /api/habits/:id
pub async fn delete_habit(
    State(state): State<SharedState>,
    id: RecordId,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    let svc = state.write().await;
    deleted(svc.delete_habit(id).await?, "Habit")
}

/// POST /api/habits/:id/check-in
pub async fn toggle_check_in(
    State(state): State<SharedState>,
    id: RecordId,
) -> ApiResult<Json<Habit>> {
    let Path(id) = id?;
    let svc = state.write().await;
    found(svc.toggle_habit_check_in(id).await?, "Habit")
}

// === Journal ===

/// GET /api/journals
pub async fn list_journals(State(state): State<SharedState>) -> ApiResult<Json<Vec<JournalEntry>>> {
    let svc = state.read().await;
    Ok(Json(svc.list_journal_entries().await?))
}

/// POST /api/journals
pub async fn create_journal_entry(
    State(state): State<SharedState>,
    payload: JsonBody<JournalDraft>,
) -> ApiResult<impl IntoResponse> {
    let Json(draft) = payload?;
    let svc = state.write().await;
    let created = svc.create_journal_entry(&draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/journals/:id
pub async fn get_journal_entry(
    State(state): State<SharedState>,
    id: RecordId,
) -> ApiResult<Json<JournalEntry>> {
    let Path(id) = id?;
    let svc = state.read().await;
    found(svc.get_journal_entry(id).await?, "Journal entry")
}

/// DELETE /api/journals/:id
pub async fn delete_journal_entry(
    State(state): State<SharedState>,
    id: RecordId,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    let svc = state.write().await;
    deleted(svc.delete_journal_entry(id).await?, "Journal entry")
}

// === Workspace ===

/// GET /api/dashboard
pub async fn dashboard(State(state): State<SharedState>) -> ApiResult<Json<DashboardSnapshot>> {
    let svc = state.read().await;
    Ok(Json(svc.dashboard().await?))
}

/// GET /api/export
pub async fn export_workspace(State(state): State<SharedState>) -> ApiResult<Json<WorkspaceExport>> {
    let svc = state.read().await;
    Ok(Json(svc.export_workspace().await?))
}

/// POST /api/import response body
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub status: &'static str,
    pub imported: ImportSummary,
}

/// POST /api/import
pub async fn import_workspace(
    State(state): State<SharedState>,
    payload: JsonBody<WorkspaceImport>,
) -> ApiResult<impl IntoResponse> {
    let Json(document) = payload?;
    let svc = state.write().await;
    let imported = svc.import_workspace(&document).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ImportResponse {
            status: "accepted",
            imported,
        }),
    ))
}
