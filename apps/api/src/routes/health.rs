use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, LLM availability and catalog size.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillbridge-api",
        "llm": state.generator.is_some(),
        "catalog": {
            "roles": state.catalog.roles().len(),
            "job_openings": state.catalog.job_openings().len()
        }
    }))
}
