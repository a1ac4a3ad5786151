use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::catalog::JobId;
use crate::models::skills::SavedJobSet;
use crate::sessions::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SavedJobsResponse {
    pub session_id: Uuid,
    pub saved_jobs: SavedJobSet,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub session_id: Uuid,
    pub job_id: JobId,
    pub saved: bool,
    pub saved_jobs: SavedJobSet,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<Session>) {
    let session = state.sessions.create().await;
    info!("Created session {}", session.id);
    (StatusCode::CREATED, Json(session))
}

/// GET /api/v1/sessions/:id/saved-jobs
pub async fn handle_saved_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedJobsResponse>, AppError> {
    let saved_jobs = state
        .sessions
        .saved(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(SavedJobsResponse {
        session_id: id,
        saved_jobs,
    }))
}

/// POST /api/v1/sessions/:id/saved-jobs/:job_id/toggle
pub async fn handle_toggle_saved_job(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, JobId)>,
) -> Result<Json<ToggleResponse>, AppError> {
    if state.catalog.job_opening(job_id).is_none() {
        return Err(AppError::NotFound(format!("Job opening {job_id} not found")));
    }
    let saved_jobs = state
        .sessions
        .toggle(id, job_id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(ToggleResponse {
        session_id: id,
        job_id,
        saved: saved_jobs.contains(job_id),
        saved_jobs,
    }))
}
