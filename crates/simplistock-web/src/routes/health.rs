//! Health route handler.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub uptime_seconds: i64,
}

/// GET /api/health - Report server status and the configured model.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.gemini.model().to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}
