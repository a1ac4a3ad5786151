use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::mapping::calculator::{learning_roadmap, required_skills};
use crate::mapping::view::{CareerMap, Selection};
use crate::models::catalog::{JobOpening, RoadmapStep, SkillRequirement, TargetRole};
use crate::models::skills::{SavedJobSet, UserSkillSet};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CareerMapQuery {
    #[serde(default)]
    pub role_id: String,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CareerMapRequest {
    #[serde(default)]
    pub role_id: String,
    pub user_skills: UserSkillSet,
    pub session_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct RolesResponse {
    pub roles: Vec<TargetRole>,
}

#[derive(Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobOpening>,
}

/// Saved jobs of the session, or an empty set when none is given.
async fn saved_for(state: &AppState, session_id: Option<Uuid>) -> Result<SavedJobSet, AppError> {
    match session_id {
        None => Ok(SavedJobSet::default()),
        Some(id) => state
            .sessions
            .saved(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found"))),
    }
}

fn derive_view(
    state: &AppState,
    role_id: &str,
    user_skills: &UserSkillSet,
    saved: &SavedJobSet,
) -> CareerMap {
    let selection = Selection::from_input(role_id);
    if let Some(id) = selection.role_id() {
        if state.catalog.role(id).is_none() {
            warn!("Career map requested for unknown role '{id}'");
        }
    }
    let view = CareerMap::derive(&state.catalog, &selection, user_skills, saved);
    debug!(
        "Career map for {:?}: {} skills, progress {}%",
        selection.role_id(),
        view.required_skills.len(),
        view.progress
    );
    view
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.catalog.roles().to_vec(),
    })
}

/// GET /api/v1/roles/:id/skills
pub async fn handle_role_skills(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<SkillRequirement>> {
    Json(required_skills(&state.catalog, &id).to_vec())
}

/// GET /api/v1/roles/:id/roadmap
pub async fn handle_role_roadmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<RoadmapStep>> {
    Json(learning_roadmap(&state.catalog, &id).to_vec())
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobsResponse> {
    Json(JobsResponse {
        jobs: state.catalog.job_openings().to_vec(),
    })
}

/// GET /api/v1/career-map, using the catalog's profile snapshot.
pub async fn handle_get_career_map(
    State(state): State<AppState>,
    Query(params): Query<CareerMapQuery>,
) -> Result<Json<CareerMap>, AppError> {
    let saved = saved_for(&state, params.session_id).await?;
    let user_skills = state.catalog.user_skills().clone();
    Ok(Json(derive_view(&state, &params.role_id, &user_skills, &saved)))
}

/// POST /api/v1/career-map, using the caller's skill list.
pub async fn handle_post_career_map(
    State(state): State<AppState>,
    Json(req): Json<CareerMapRequest>,
) -> Result<Json<CareerMap>, AppError> {
    let saved = saved_for(&state, req.session_id).await?;
    Ok(Json(derive_view(&state, &req.role_id, &req.user_skills, &saved)))
}
