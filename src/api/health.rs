use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_key: String,
    pub api_host: String,
    pub timestamp: String,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let api_key_status = if state.config.api_key.is_some() {
        "configured"
    } else {
        "missing"
    };

    Json(HealthResponse {
        status: if state.config.api_key.is_some() {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        api_key: api_key_status.to_string(),
        api_host: state.config.api_host.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
