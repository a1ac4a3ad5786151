pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::coaching::handlers as coaching;
use crate::mapping::handlers as mapping;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::sessions::handlers as sessions;
use crate::state::AppState;

/// Upload cap for resume files.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog and reverse career mapping
        .route("/api/v1/roles", get(mapping::handle_list_roles))
        .route("/api/v1/roles/:id/skills", get(mapping::handle_role_skills))
        .route("/api/v1/roles/:id/roadmap", get(mapping::handle_role_roadmap))
        .route("/api/v1/jobs", get(mapping::handle_list_jobs))
        .route(
            "/api/v1/career-map",
            get(mapping::handle_get_career_map).post(mapping::handle_post_career_map),
        )
        // Saved jobs
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id/saved-jobs",
            get(sessions::handle_saved_jobs),
        )
        .route(
            "/api/v1/sessions/:id/saved-jobs/:job_id/toggle",
            post(sessions::handle_toggle_saved_job),
        )
        // Keyword matching
        .route(
            "/api/v1/match/resume-job",
            post(matching::handle_match_resume_job),
        )
        .route(
            "/api/v1/match/resume-courses",
            post(matching::handle_match_resume_courses),
        )
        // Resume upload
        .route(
            "/api/v1/resume/extract",
            post(resume::handle_extract).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // LLM coaching
        .route(
            "/api/v1/career/goals-reverse",
            post(coaching::handle_goals_reverse),
        )
        .route("/api/v1/career/simulator", post(coaching::handle_simulator))
        .route("/api/v1/portfolio/builder", post(coaching::handle_portfolio))
        .route(
            "/api/v1/interview/questions",
            post(coaching::handle_interview_questions),
        )
        .route(
            "/api/v1/assessment/questions",
            post(coaching::handle_assessment_questions),
        )
        .with_state(state)
}
